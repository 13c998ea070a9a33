//! Build a tree over the web-referrer fixture, print it, and export a PNG.
//!
//! Run with: `cargo run --example draw_tree`

use cartree::testing::data::{referrer_schema, referrer_table};
use cartree::{
    render_text, save_tree, Entropy, RasterParams, RenderError, TreeBuilder, TreeParams, Verbosity,
};

fn main() -> Result<(), RenderError> {
    let table = referrer_table();
    let schema = referrer_schema();

    let builder = TreeBuilder::new(
        Entropy,
        TreeParams {
            verbosity: Verbosity::Info,
        },
    );
    let tree = builder.build(&table);

    print!("{}", render_text(&tree, &schema));

    save_tree(&tree, &schema, &RasterParams::default(), "decision_tree.png")?;
    println!("wrote decision_tree.png");
    Ok(())
}
