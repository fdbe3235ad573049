mod property_reset;
mod utils;
