use scoreboard_common::config::Config;
use scoreboard_common::validate::{SCORE_RANGE, USERNAME_LEN};

use crate::terminal::print;

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    print::header("entity rules", cfg.quiet);

    let rules: [(&str, String); 4] = [
        ("Game title", "non-empty, fixed once set".to_string()),
        (
            "Player username",
            format!("{} to {} characters, renamable", USERNAME_LEN.start(), USERNAME_LEN.end()),
        ),
        (
            "Result score",
            format!("integer {} to {}, fixed once set", SCORE_RANGE.start(), SCORE_RANGE.end()),
        ),
        ("Result links", "one player and one game of the same library".to_string()),
    ];

    print::set_key_width(rules.iter().map(|(key, _)| *key));
    for (key, value) in rules {
        print::aligned_line(key, value);
    }

    Ok(())
}
