use std::{
    env,
    io::{Error, ErrorKind, Result},
    net::SocketAddr,
};

#[derive(Debug)]
pub struct Env {}

mod default {
    pub const DEBUG_MODE: &str = "false";
    pub const LISTEN_ADDR: &str = "127.0.0.1";
    pub const LISTEN_PORT: &str = "3000";
    pub const METRIC_NAMESPACE: &str = "hello_world";
    pub const METRIC_SUBSYSTEM: &str = "http";
}

mod environment {
    pub const DEBUG_MODE: &str = "SERVER_DEBUG_MODE";
    pub const LISTEN_ADDR: &str = "SERVER_LISTEN_ADDR";
    pub const LISTEN_PORT: &str = "SERVER_LISTEN_PORT";
    pub const METRIC_NAMESPACE: &str = "SERVER_METRIC_NAMESPACE";
    pub const METRIC_SUBSYSTEM: &str = "SERVER_METRIC_SUBSYSTEM";
}

fn var_or(name: &str, fallback: &str) -> String {
    env::var(name).unwrap_or(fallback.into())
}

fn parse_flag(value: &str) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "ok" | "okay" | "on" | "true" | "yep" | "yes" => true,
        _ => false,
    }
}

fn parse_address(addr: &str, port: &str) -> Result<SocketAddr> {
    format!("{}:{}", addr, port).parse().map_err(|err| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("invalid listen address {}:{}: {}", addr, port, err),
        )
    })
}

impl Env {
    pub fn is_debug_mode() -> bool {
        parse_flag(&var_or(environment::DEBUG_MODE, default::DEBUG_MODE))
    }

    pub fn parse_metric_namespace() -> String {
        var_or(environment::METRIC_NAMESPACE, default::METRIC_NAMESPACE)
    }

    pub fn parse_metric_subsystem() -> String {
        var_or(environment::METRIC_SUBSYSTEM, default::METRIC_SUBSYSTEM)
    }

    pub fn parse_service_address() -> Result<SocketAddr> {
        parse_address(
            &var_or(environment::LISTEN_ADDR, default::LISTEN_ADDR),
            &var_or(environment::LISTEN_PORT, default::LISTEN_PORT),
        )
    }
}
