use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    Config,
};

const LOG_CONFIG_FILE: &str = "log4rs.yaml";
const FALLBACK_APPENDER_NAME: &str = "stderr";

#[ctor::ctor]
fn init() {
    if log4rs::init_file(LOG_CONFIG_FILE, Default::default()).is_ok() {
        return;
    }
    // no usable config file next to the binary, keep diagnostics on stderr
    if let Some(config) = fallback_config() {
        install_fallback(config);
    }
}

fn install_fallback(config: Config) -> bool {
    if let Err(e) = log4rs::init_config(config) {
        eprintln!("Failed to initialize fallback logger: {}", e);
        return false;
    }
    true
}

fn fallback_config() -> Option<Config> {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    Config::builder()
        .appender(Appender::builder().build(FALLBACK_APPENDER_NAME, Box::new(stderr)))
        .build(
            Root::builder()
                .appender(FALLBACK_APPENDER_NAME)
                .build(LevelFilter::Info),
        )
        .ok()
}

pub fn log_glyph_row(row_index: u32, bytes: &[u8]) {
    fn get_bit_strings(bytes: &[u8]) -> Vec<String> {
        bytes.iter().map(|byte| format!("{:08b}", byte)).collect()
    }
    log::trace!("{:>4} {:?}", row_index, get_bit_strings(bytes));
}
