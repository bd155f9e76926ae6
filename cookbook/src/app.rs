use crate::config::{Config, Mode};
use crate::error::AppError;
use crate::term::Term;
use crate::weather::OpenMeteo;
use cookbook_lib::completion::CompletionClient;
use cookbook_lib::context::{Context, Turn};
use cookbook_lib::dispatch::QueryHandler;
use cookbook_lib::extract::{split_list, Extractor};
use cookbook_lib::request::get_reqwest_client;
use cookbook_lib::Error;
use rustyline::error::ReadlineError;

/// App.
pub struct App {
    config: Config,
    handler: QueryHandler,
}

impl App {

    /// Create new app.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let reqwest_client = get_reqwest_client()?;
        let completion = CompletionClient::new(config.api.clone(), reqwest_client, config.wire_shape);
        let handler = QueryHandler::new(completion, Box::new(OpenMeteo::new()), config.params.clone());

        Ok(App {
            config,
            handler,
        })
    }

    /// Run app.
    pub async fn run(&self) -> Result<(), AppError> {
        match self.config.mode {
            Mode::Ask => {
                if let Some(message) = &self.config.message {
                    self.ask_once(message).await
                } else {
                    self.ask_loop().await
                }
            },
            Mode::Complete => self.complete().await,
            Mode::Extract => self.extract().await,
            Mode::Judge => self.judge().await,
        }
    }

    async fn ask_once(&self, message: &str) -> Result<(), AppError> {
        match self.handler.handle_query(message).await? {
            Some(answer) => {
                Term::new().model_print(&answer);
                Ok(())
            },
            None => Err(AppError::NoCompletion),
        }
    }

    async fn ask_loop(&self) -> Result<(), AppError> {
        let mut term = Term::interactive()?;
        term.print_intro();

        while let Some(query) = self.get_user_message(&mut term)? {
            match self.handler.handle_query(&query).await {
                Ok(Some(answer)) => term.model_print(&answer),
                Ok(None) => term.notice_print(&AppError::NoCompletion.to_string()),
                Err(err @ (Error::UnknownIntent(_) | Error::InvalidCoordinate(_) | Error::Weather(_))) => {
                    term.notice_print(&err.to_string())
                },
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }

    async fn complete(&self) -> Result<(), AppError> {
        let context = build_context(&self.config);

        let text = self.handler.completion().complete(&context, self.handler.params()).await
            .ok_or(AppError::NoCompletion)?;

        println!("{}", text);
        Ok(())
    }

    async fn extract(&self) -> Result<(), AppError> {
        let context = build_context(&self.config);
        let (extractor, fields) = extraction_plan(&self.config);

        let result = self.handler.completion().respond(&context, &extractor, &fields, self.handler.params()).await;

        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(())
    }

    async fn judge(&self) -> Result<(), AppError> {
        let context = build_context(&self.config);

        let verdict = self.handler.completion().complete_json(&context, self.handler.params()).await
            .ok_or(AppError::NoCompletion)?;

        println!("{}", serde_json::to_string_pretty(&verdict)?);
        Ok(())
    }

    fn get_user_message(&self, term: &mut Term) -> Result<Option<String>, AppError> {
        loop {
            match term.user_input() {
                Ok(user_msg) => {
                    let user_msg = user_msg.trim();
                    if user_msg == "?" {
                        term.print_help();
                    } else if !user_msg.is_empty() {
                        return Ok(Some(user_msg.to_owned()));
                    }
                },
                Err(AppError::Rustyline(ReadlineError::Interrupted | ReadlineError::Eof)) => return Ok(None),
                Err(err) => return Err(err),
            }
        }
    }
}

/// System prompt, few-shot examples, then the labeled message.
fn build_context(config: &Config) -> Context {
    let examples = config.examples.iter()
        .flat_map(|(input, output)| [Turn::user(input.as_str()), Turn::model(output.as_str())]);

    Context::build_chained(
        &config.system,
        examples,
        config.message.as_deref().unwrap_or_default(),
        &config.user_label,
    )
}

/// Extractor with `split_list` on list fields, and all field names in order:
/// text fields first, then list fields.
fn extraction_plan(config: &Config) -> (Extractor, Vec<&str>) {
    let fields: Vec<&str> = config.fields.iter()
        .chain(config.list_fields.iter())
        .map(String::as_str)
        .collect();

    let extractor = config.list_fields.iter()
        .fold(Extractor::new().with_fields(&fields), |extractor, field| extractor.with_parser(field, split_list));

    (extractor, fields)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use cookbook_lib::context::Role;
    use cookbook_lib::extract::FieldValue;

    fn config(options: Options) -> Config {
        Config::try_from(options).expect("config")
    }

    #[test]
    fn test_extraction_plan() {
        let config = config(Options {
            mode: Some("extract".into()),
            fields: vec!["start_time".into(), "end_time".into()],
            list_fields: vec!["participants".into()],
            ..Default::default()
        });

        let (extractor, fields) = extraction_plan(&config);

        assert_eq!(fields, vec!["start_time", "end_time", "participants"]);
        assert!(fields.iter().all(|f| extractor.is_compiled(f)));

        let result = extractor.extract(
            "<parts><start_time>14:00</start_time><participants>[Alice, Bob]</participants></parts>",
            &fields,
        );
        assert_eq!(result["start_time"], FieldValue::Text("14:00".into()));
        assert_eq!(result["end_time"], FieldValue::Text(String::new()));
        assert_eq!(result["participants"], FieldValue::List(vec!["Alice".into(), "Bob".into()]));

        let result = extractor.extract("no tags", &fields);
        assert_eq!(result["participants"], FieldValue::List(vec![]));
    }

    #[test]
    fn test_build_context_with_examples() {
        let config = config(Options {
            system: Some("Extract meeting times.".into()),
            message: Some("Friday 3pm?".into()),
            user_label: Some("Email body".into()),
            examples: vec![
                ("2:00-4:00pm is good for me".into(), "<start_time>14:00</start_time>".into()),
                ("Let's do 10:00am".into(), "<start_time>10:00</start_time>".into()),
            ],
            ..Default::default()
        });

        let context = build_context(&config);
        let turns = context.turns();

        assert_eq!(turns.len(), 6);
        assert_eq!(turns[0], Turn::system("Extract meeting times."));
        assert_eq!(turns[1], Turn::user("2:00-4:00pm is good for me"));
        assert_eq!(turns[2].role(), Role::Model);
        assert_eq!(turns[4].text(), "<start_time>10:00</start_time>");
        assert_eq!(turns[5], Turn::user("Email body: Friday 3pm?"));
    }

    #[test]
    fn test_build_context_without_examples() {
        let config = config(Options {
            system: Some("sys".into()),
            message: Some("hi".into()),
            ..Default::default()
        });

        assert_eq!(build_context(&config), Context::build("sys", "hi"));
    }
}
