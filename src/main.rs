// SPDX-License-Identifier: MPL-2.0
use newsdesk::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        draft_path: args.opt_value_from_str("--draft").unwrap_or(None).or_else(|| {
            args.finish()
                .into_iter()
                .next()
                .and_then(|s| s.into_string().ok())
        }),
    };

    app::run(flags)
}
