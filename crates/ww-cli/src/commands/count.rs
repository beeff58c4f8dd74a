use std::path::Path;

pub fn run(file: Option<&Path>) -> Result<(), String> {
    let text = super::read_input(file)?;
    println!("{}", ww_gate::count_words(&text));
    Ok(())
}
