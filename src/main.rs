// SPDX-License-Identifier: MPL-2.0
use folio_lens::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        langs_dir: args.opt_value_from_str("--langs-dir").unwrap(),
        langs_url: args.opt_value_from_str("--langs-url").unwrap(),
        portfolio: args.opt_value_from_str("--portfolio").unwrap(),
    };

    app::run(flags)
}
