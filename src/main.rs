// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        product: args.opt_value_from_str("--product").ok().flatten(),
        config: args.opt_value_from_str("--config").ok().flatten(),
    };

    app::run(flags)
}
