use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use structopt::StructOpt;

use agora_server::{
    app,
    persist::{NoopPersistence, Persistence},
    store::Store,
    AppState,
};

#[derive(Debug, StructOpt)]
#[structopt(name = "agora-server", about = "In-memory forum backend")]
struct Opt {
    /// Port to listen on
    #[structopt(long, env = "PORT", default_value = "4000")]
    port: u16,

    /// Disable persistence hook invocation
    #[structopt(long)]
    test_mode: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let opt = Opt::from_args();
    let test_mode = opt.test_mode || std::env::var_os("IS_TEST_MODE").is_some();

    // The host environment may swap in a real provider here; the core only
    // ever talks to the two hooks.
    let persist: Arc<dyn Persistence> = Arc::new(NoopPersistence);

    let mut store = Store::new();
    if !test_mode {
        if let Some(saved) = persist.load().context("loading store snapshot")? {
            store = saved;
        }
    }

    let mut state = AppState::new(store).with_persistence(persist);
    if test_mode {
        state = state.test_mode();
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], opt.port));
    tracing::info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app(state).into_make_service())
        .await
        .context("serving axum webserver")
}
