use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use ww_gate::Profile;

pub fn run(config: Option<&Path>) -> Result<(), String> {
    let config = super::load_config(config)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Profile",
        "Min words",
        "Max words",
        "Refusal",
        "Completeness",
        "Extra rule",
    ]);

    for profile in Profile::ALL {
        let opts = config.options_for(profile);
        let extra = match profile {
            Profile::Narrative => "warn without second person",
            Profile::Choice => "length only",
            Profile::Generic | Profile::World => "—",
        };
        table.add_row(vec![
            profile.to_string(),
            opts.min_words.to_string(),
            opts.max_words.to_string(),
            on_off(opts.check_refusal && profile != Profile::Choice).to_string(),
            on_off(opts.check_completeness && profile != Profile::Choice).to_string(),
            extra.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
