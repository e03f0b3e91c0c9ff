pub mod factories;
pub mod mocks;

use tana::shared::utils::logger;

/// Initialize logging once for the whole test binary
pub fn init() {
    logger::init_logger();
}
