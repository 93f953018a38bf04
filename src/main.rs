use {actix_rt::System, std::io::Result};

mod env;
mod handler;
mod invocation;
mod server;
mod state;

fn main() -> Result<()> {
    env_logger::init();

    System::new().block_on(server::start())
}
