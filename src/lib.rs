
pub mod error;

pub mod service {
    pub mod traits {
        pub mod i_service;
    }
    pub mod config_service;
    pub mod dispatcher;
    pub mod headless;
    pub mod probe;
    pub mod word;
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod models {
    pub mod capability;
    pub mod conversion;
    pub mod session;
}

pub mod facade {
    pub mod traits {
        pub mod i_conversion;
    }
    pub mod conversion_facade;
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod utils {
    pub mod file;
    pub mod utils;
}
