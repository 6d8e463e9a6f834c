use std::ffi::OsString;

use clap::{AppSettings, Arg, ArgMatches, SubCommand};
use tracing::debug;

use crate::{
    config,
    error::{PwgenError, PwgenResult},
    password::{
        generator::{Generator, Randomness},
        GenerationConfig, MAX_LENGTH,
    },
    session::{Action, Session},
    ui::{Alert, StderrAlert},
};

pub struct CLI<'a>(ArgMatches<'a>);

fn app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("pwgen")
        .version("0.1.0")
        .author("Protoshark <protoshark@pm.me>")
        .about("A simple password generator")
        .after_help(
            "NOTE: The default settings are read from the PWGEN_CONFIG file \
             (~/.config/pwgen/config.json if unset)",
        )
        .settings(&[
            AppSettings::GlobalVersion,
            AppSettings::DisableHelpSubcommand,
            AppSettings::ArgsNegateSubcommands,
            AppSettings::SubcommandRequiredElseHelp,
        ])
        .subcommand(generate_command())
        // pwgen config
        .subcommand(
            SubCommand::with_name("config")
                .setting(AppSettings::DisableVersion)
                .about("Print the settings loaded from the config file")
                .display_order(1),
        )
}

// pwgen generate
fn generate_command<'a, 'b>() -> clap::App<'a, 'b> {
    let command = SubCommand::with_name("generate")
        .setting(AppSettings::DisableVersion)
        .about("Generate a password")
        .arg(
            Arg::with_name("length")
                .long("length")
                .short("L")
                .help("The length of the generated password (0 to 20)")
                .takes_value(true)
                .allow_hyphen_values(true)
                .display_order(0),
        )
        .arg(class_arg("uppercase", "u", "Include uppercase letters", 1))
        .arg(class_arg("lowercase", "l", "Include lowercase letters", 2))
        .arg(class_arg("numbers", "n", "Include numbers", 3))
        .arg(class_arg("symbols", "s", "Include symbols", 4))
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .help("Seed the random source for reproducible output")
                .takes_value(true)
                .validator(|seed| {
                    seed.parse::<u64>()
                        .map(|_| ())
                        .map_err(|_| format!("invalid seed: {}", seed))
                })
                .display_order(5),
        )
        .display_order(0);

    #[cfg(feature = "clipboard")]
    let command = command.arg(
        Arg::with_name("copy")
            .long("copy")
            .short("c")
            .help("Copy the generated password to the clipboard")
            .display_order(6),
    );

    command
}

/// A class toggle: `--symbols` switches the class on, `--symbols=false` off
fn class_arg<'a, 'b>(
    name: &'static str,
    short: &'static str,
    help: &'static str,
    order: usize,
) -> Arg<'a, 'b> {
    Arg::with_name(name)
        .long(name)
        .short(short)
        .help(help)
        .takes_value(true)
        .min_values(0)
        .max_values(1)
        .require_equals(true)
        .possible_values(&["true", "false"])
        .value_name("BOOL")
        .display_order(order)
}

/// `None` when the option is absent, a bare flag means `true`
fn toggle(args: &ArgMatches, name: &str) -> Option<bool> {
    if !args.is_present(name) {
        return None;
    }

    Some(args.value_of(name).map_or(true, |value| value == "true"))
}

impl<'a> CLI<'a> {
    pub fn from_args() -> Self {
        Self(app().get_matches())
    }

    pub fn from_iter<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        app().get_matches_from_safe(args).map(Self)
    }

    pub fn run(self) -> PwgenResult<()> {
        let args = self.0;

        match args.subcommand() {
            ("generate", Some(generate_args)) => handle_generate(generate_args),
            ("config", Some(_)) => handle_config(),
            _ => Ok(()),
        }
    }
}

/// Turns the generate options into updates, in field order
fn actions(args: &ArgMatches) -> PwgenResult<Vec<Action>> {
    let mut actions = Vec::new();

    if let Some(length) = args.value_of("length") {
        let length: usize = length
            .parse()
            .map_err(|_| PwgenError::InvalidLength(length.to_string()))?;
        if length > MAX_LENGTH {
            return Err(PwgenError::LengthOutOfRange(length));
        }
        actions.push(Action::SetLength(length));
    }

    if let Some(include) = toggle(args, "uppercase") {
        actions.push(Action::SetIncludeUppercase(include));
    }
    if let Some(include) = toggle(args, "lowercase") {
        actions.push(Action::SetIncludeLowercase(include));
    }
    if let Some(include) = toggle(args, "numbers") {
        actions.push(Action::SetIncludeNumbers(include));
    }
    if let Some(include) = toggle(args, "symbols") {
        actions.push(Action::SetIncludeSymbols(include));
    }

    Ok(actions)
}

fn randomness(args: &ArgMatches) -> Randomness {
    // the validator already rejected anything that is not a u64
    match args.value_of("seed").and_then(|seed| seed.parse().ok()) {
        Some(seed) => Randomness::Seeded(seed),
        None => Randomness::Os,
    }
}

/// Applies the options on top of the loaded config and generates once
fn generate_session(
    args: &ArgMatches,
    config: GenerationConfig,
    generator: &mut Generator,
    alert: &mut dyn Alert,
) -> PwgenResult<Session> {
    let mut session = Session::new(config);

    for action in actions(args)? {
        session.update(action);
    }
    debug!(config = ?session.config(), "generating");

    session.trigger_generation(generator, alert)?;

    Ok(session)
}

fn handle_generate(args: &ArgMatches) -> PwgenResult<()> {
    let config = config::load(crate::config_path())?;
    let mut generator = Generator::from(randomness(args));
    let session = generate_session(args, config, &mut generator, &mut StderrAlert)?;

    println!("{}", session.password());

    #[cfg(feature = "clipboard")]
    {
        if args.is_present("copy") {
            let mut clipboard = crate::ui::SystemClipboard::new()?;
            session.copy_password(&mut clipboard)?;
        }
    }

    Ok(())
}

fn handle_config() -> PwgenResult<()> {
    let config = config::load(crate::config_path())?;
    let json = serde_json::to_string_pretty(&config).map_err(PwgenError::Serialization)?;
    println!("{}", json);

    Ok(())
}
