//! Show the advisory context sent with each question

use lexa_types::fixtures;

pub fn run(pretty: bool) -> anyhow::Result<()> {
    let context = fixtures::demo_context();
    let json = if pretty {
        serde_json::to_string_pretty(&context)?
    } else {
        context.to_json()?
    };
    println!("{}", json);
    Ok(())
}
