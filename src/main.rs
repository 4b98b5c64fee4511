use std::process;

use foxcloud_icongen::config::Config;
use foxcloud_icongen::logger::{log_error, log_hint, log_line};
use foxcloud_icongen::run;

fn main() {
    log_line("FoxCloud Icon Generator");
    log_line(&"=".repeat(40));

    let cfg = match Config::from_current_dir() {
        Ok(cfg) => cfg,
        Err(e) => {
            log_error("cannot resolve project directory", &e);
            process::exit(1);
        }
    };

    match run(&cfg) {
        Ok(summary) => log_line(&format!(
            "\nAll icons generated! ({} written, {} skipped)",
            summary.written, summary.skipped
        )),
        Err(e) => {
            log_error("icon generation failed", &e);
            if e.is_not_found() {
                log_hint(&format!(
                    "expected the master icon at {}; run from the project root",
                    cfg.source_icon().display()
                ));
            }
            process::exit(1);
        }
    }
}
