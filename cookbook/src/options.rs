//! App initialization functions.

use anstyle::Style;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use std::ffi::OsString;
use std::str::FromStr;
use cookbook_lib::{API_KEY_VAR, BASE_URL_VAR};
use crate::error::AppError;
use crate::toml_parser::parse_toml_config;
use crate::util::{default_config_path, parse_list};

/// App options.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Inference API base URL.
    pub base_url: Option<String>,
    /// API key.
    pub api_key: Option<String>,
    /// Model name.
    pub model: Option<String>,
    /// Wire shape: legacy or chat.
    pub wire_shape: Option<String>,
    /// Level of randomization when choosing tokens.
    pub temperature: Option<f64>,
    /// Only the tokens comprising the top_p probability mass will be considered.
    pub top_p: Option<f64>,
    /// Let the model search the web.
    pub web_search: Option<bool>,
    /// What to do: ask, complete, extract, judge.
    pub mode: Option<String>,
    /// User message.
    pub message: Option<String>,
    /// System prompt for complete, extract and judge.
    pub system: Option<String>,
    /// Label prefixed to the user message.
    pub user_label: Option<String>,
    /// Fields to extract as text.
    pub fields: Vec<String>,
    /// Fields to extract as bracketed lists.
    pub list_fields: Vec<String>,
    /// Few-shot `(input, output)` pairs placed before the message.
    pub examples: Vec<(String, String)>,
}


macro_rules! check_and_set_float_arg {
    ($arg:literal, $m:ident, $option:expr) => {
        if let Some(x) = $m.get_one::<String>($arg) {
            if let Ok(val) = f64::from_str(x) {
                $option.replace(val);
            } else {
                return Err(AppError::InvalidArgError(concat!($arg, " must be floating point number")));
            }
        }
    }
}

macro_rules! check_and_set_str_arg {
    ($arg:literal, $m:ident, $option:expr) => {
        if let Some(x) = $m.get_one::<String>($arg) {
            $option.replace(x.clone());
        }
    }
}

impl Options {

    /// Create new unfilled options.
    pub fn new() -> Self {
        Self::default()
    }

    fn argument_parser<T>(args: impl IntoIterator<Item = T>, with_env: bool) -> ArgMatches where T: Into<OsString> + Clone {
        let with_env_var = |arg: Arg, var: &'static str| if with_env { arg.env(var) } else { arg };
        let bold_underline = Style::new().underline().bold();
        let bold = Style::new().bold();

        Command::new("Cookbook")
            .about("Cookbook runs prompt patterns against a hosted inference API: intent-routed questions, plain completions, and tagged-field extraction.")
            .version(env!("CARGO_PKG_VERSION"))
            .arg(
                with_env_var(Arg::new("base-url")
                .long("base-url")
                .help("Inference API base URL")
                .short('u')
                .required(false), BASE_URL_VAR)
            ).arg(
                with_env_var(Arg::new("api-key")
                .long("api-key")
                .help("Inference API key")
                .short('k')
                .required(false), API_KEY_VAR)
            ).arg(
                with_env_var(Arg::new("model")
                .long("model")
                .help("Model (config) name, e.g. inflection_3_pi, inflection_3_productivity")
                .short('m')
                .required(false), "COOKBOOK_MODEL")
            ).arg(
                with_env_var(Arg::new("wire-shape")
                .long("wire-shape")
                .help("API request/response format, one of: legacy, chat")
                .short('w')
                .required(false), "COOKBOOK_WIRE_SHAPE")
            ).arg(
                with_env_var(Arg::new("config")
                .long("config")
                .help("Config file path")
                .short('c')
                .required(false), "COOKBOOK_CONFIG")
            ).arg(
                with_env_var(Arg::new("mode")
                .long("mode")
                .help("One of: ask (intent-routed answer), complete (raw reply), extract (tagged fields), judge (JSON object reply)")
                .required(false), "COOKBOOK_MODE")
            ).arg(
                with_env_var(Arg::new("message")
                .long("message")
                .help("User's message")
                .short('e')
                .required(false), "COOKBOOK_MESSAGE")
            ).arg(
                with_env_var(Arg::new("system")
                .long("system")
                .help("System prompt (complete, extract and judge modes)")
                .short('s')
                .required(false), "COOKBOOK_SYSTEM")
            ).arg(
                with_env_var(Arg::new("label")
                .long("label")
                .help("Label prefixed to the user's message")
                .short('l')
                .required(false), "COOKBOOK_LABEL")
            ).arg(
                Arg::new("fields")
                .long("fields")
                .help("Comma separated tag names to extract (extract mode)")
                .short('f')
                .required(false)
            ).arg(
                Arg::new("list-fields")
                .long("list-fields")
                .help("Comma separated tag names whose values are [a, b, ...] lists (extract mode)")
                .required(false)
            ).arg(
                with_env_var(Arg::new("temperature")
                .long("temperature")
                .help("Level of randomization when the model chooses tokens")
                .required(false), "COOKBOOK_TEMPERATURE")
            ).arg(
                with_env_var(Arg::new("top-p")
                .long("top-p")
                .help("Only the tokens comprising the top_p probability mass will be considered")
                .required(false), "COOKBOOK_TOP_P")
            ).arg(
                with_env_var(Arg::new("web-search")
                .long("web-search")
                .help("Let the model search the web")
                .action(ArgAction::SetTrue), "COOKBOOK_WEB_SEARCH")
            )
            .after_help(format!("{bold_underline}Example:{bold_underline:#} {bold}

    cookbook --base-url=<url> --api-key=<your-key> --message='What is the weather in Hawaii?'

    cookbook --mode=extract --system='Return <category>...</category>' --fields=category --message='Project Alpha ...'{bold:#}

Cookbook reads the configuration file .cookbook.toml from the user's home directory, or the one specified with -c option.
The configuration options can be overridden with the command line arguments or environment variables.
Without --message, ask mode reads questions interactively.
Few-shot examples are read from the `examples` list of the config file."))
            .get_matches_from(args)
    }

    fn load_config_file(path: Option<&str>) -> Result<Option<String>, std::io::Error> {
        Ok(if let Some(p) = path {
            Some(std::fs::read_to_string(p)?)
        } else if let Some(p) = default_config_path() {
            if std::fs::exists(p.as_path())? {
                Some(std::fs::read_to_string(p.as_path())?)
            } else {
                None
            }
        } else {
            None
        })
    }

    fn validate_options(options: &Options) -> Result<(), AppError> {
        let mode = options.mode.as_deref().unwrap_or("ask");
        match mode {
            "ask" => {},
            "complete" | "extract" | "judge" => {
                if options.system.is_none() {
                    return Err(AppError::MissingArgError("system prompt is not specified."));
                }
                if options.message.is_none() {
                    return Err(AppError::MissingArgError("message is not specified."));
                }
                if mode == "extract" && options.fields.is_empty() && options.list_fields.is_empty() {
                    return Err(AppError::MissingArgError("fields to extract are not specified."));
                }
            },
            _ => return Err(AppError::InvalidArgError("mode must be one of: ask, complete, extract, judge")),
        }

        if let Some(top_p) = options.top_p {
            if !(0.0..=1.0).contains(&top_p) {
                return Err(AppError::InvalidArgError("top-p must be between 0 and 1"));
            }
        }
        if let Some(temperature) = options.temperature {
            if temperature < 0.0 {
                return Err(AppError::InvalidArgError("temperature must be non-negative"));
            }
        }

        Ok(())
    }

    /// Load and validate options from env, command line arguments, config file.
    pub fn load<T>(args: impl IntoIterator<Item = T>) -> Result<Self, AppError>
        where T: Into<OsString> + Clone
    {
        Self::load_from(args, true)
    }

    fn load_from<T>(args: impl IntoIterator<Item = T>, with_env: bool) -> Result<Self, AppError>
        where T: Into<OsString> + Clone
    {
        let m = Self::argument_parser(args, with_env);

        let mut options = Options::new();

        let config_path = m.get_one("config").map(|s: &String| s.as_ref());

        if let Some(content) = Self::load_config_file(config_path)
            .map_err(|err| AppError::Error(format!("Error loading config file: {}", err)))?
        {
            parse_toml_config(&content, &mut options)?;
        }

        check_and_set_str_arg!("base-url", m, options.base_url);
        check_and_set_str_arg!("api-key", m, options.api_key);
        check_and_set_str_arg!("model", m, options.model);
        check_and_set_str_arg!("wire-shape", m, options.wire_shape);
        check_and_set_str_arg!("mode", m, options.mode);
        check_and_set_str_arg!("system", m, options.system);
        check_and_set_str_arg!("label", m, options.user_label);

        check_and_set_float_arg!("temperature", m, options.temperature);
        check_and_set_float_arg!("top-p", m, options.top_p);

        if m.get_flag("web-search") {
            options.web_search.replace(true);
        }

        if let Some(x) = m.get_one::<String>("fields") {
            options.fields = parse_list(x);
        }
        if let Some(x) = m.get_one::<String>("list-fields") {
            options.list_fields = parse_list(x);
        }

        options.message = m.get_one::<String>("message").cloned();

        Self::validate_options(&options)?;

        Ok(options)
    }
}
