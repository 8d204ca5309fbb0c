// Thin entry point - setup and the single draw live in lib.rs.

use pollster::block_on;
use wgpu_logo::run;

fn main() -> anyhow::Result<()> {
    block_on(run())
}
