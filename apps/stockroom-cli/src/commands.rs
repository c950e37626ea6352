//! # Commands
//!
//! Argument parsing and dispatch onto the use cases.
//!
//! ```text
//! stockroom create <name> <price>   ──► CreateProductUseCase ──► {"id": "..."}
//! stockroom list [--summary]        ──► ListProductUseCase   ──► {"products": [...]}
//! stockroom --help                  ──► usage text
//! ```

use serde::Serialize;
use stockroom_core::{
    CreateProductInput, CreateProductUseCase, ListProductUseCase, ProductSummary, UseCase,
};
use tracing::debug;

use crate::error::{CliError, CliResult};

pub const USAGE: &str = "\
Stockroom product catalog

Usage:
  stockroom create <name> <price>   Add a product (quantity starts at 0)
  stockroom list [--summary]        Print every product as JSON
  stockroom --help                  Show this help message

Options:
  -s, --summary    Leave quantities out of the listing

Environment:
  STOCKROOM_DATABASE_PATH     SQLite file (default: ./stockroom.db)
  STOCKROOM_MAX_CONNECTIONS   Pool size (default: 5)
  STOCKROOM_VALIDATE_INPUT    Refuse empty names / negative prices (default: false)
  STOCKROOM_LOG               Log filter (default: info)";

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create { name: String, price: f64 },
    List { summary: bool },
    Help,
}

impl Command {
    /// Parses the arguments that follow the program name.
    pub fn parse<I, S>(args: I) -> CliResult<Command>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();

        match args.first().map(String::as_str) {
            None | Some("help") | Some("--help") | Some("-h") => Ok(Command::Help),

            // Everything after `create` is positional, so a name may look like a flag
            Some("create") => match &args[1..] {
                [name, price] => {
                    let price = price
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| CliError::usage(format!("'{price}' is not a valid price")))?;
                    Ok(Command::Create {
                        name: name.clone(),
                        price,
                    })
                }
                _ => Err(CliError::usage("create expects <name> <price>")),
            },

            Some("list") => {
                let mut summary = false;
                for arg in &args[1..] {
                    match arg.as_str() {
                        "--summary" | "-s" => summary = true,
                        "--help" | "-h" => return Ok(Command::Help),
                        other => {
                            return Err(CliError::usage(format!("unknown option '{other}' for list")))
                        }
                    }
                }
                Ok(Command::List { summary })
            }

            Some(other) => Err(CliError::usage(format!("unknown command '{other}'"))),
        }
    }
}

#[derive(Serialize)]
struct SummaryListing {
    products: Vec<ProductSummary>,
}

/// The two use cases the CLI drives, sharing one gateway.
pub struct App {
    pub create: CreateProductUseCase,
    pub list: ListProductUseCase,
}

impl App {
    /// Runs a command and returns what should be printed on stdout.
    pub async fn run(&self, command: Command) -> CliResult<String> {
        debug!(?command, "Running command");

        let output = match command {
            Command::Help => USAGE.to_string(),

            Command::Create { name, price } => {
                let created = self
                    .create
                    .execute(CreateProductInput::new(name, price))
                    .await?;
                serde_json::to_string_pretty(&created)?
            }

            Command::List { summary: false } => {
                let listed = self.list.execute(()).await?;
                serde_json::to_string_pretty(&listed)?
            }

            Command::List { summary: true } => {
                let listed = self.list.execute(()).await?;
                serde_json::to_string_pretty(&SummaryListing {
                    products: listed.summaries(),
                })?
            }
        };

        Ok(output)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use stockroom_core::{CoreError, InMemoryProductGateway, ProductGateway};

    fn app(gateway: Arc<dyn ProductGateway>, validate: bool) -> App {
        App {
            create: CreateProductUseCase::new(gateway.clone()).with_input_validation(validate),
            list: ListProductUseCase::new(gateway),
        }
    }

    #[test]
    fn test_parse_create() {
        assert_eq!(
            Command::parse(["create", "Widget", "9.99"]).unwrap(),
            Command::Create {
                name: "Widget".to_string(),
                price: 9.99
            }
        );
    }

    #[test]
    fn test_parse_list_and_help() {
        assert_eq!(
            Command::parse(["list"]).unwrap(),
            Command::List { summary: false }
        );
        assert_eq!(
            Command::parse(["list", "--summary"]).unwrap(),
            Command::List { summary: true }
        );
        assert_eq!(Command::parse(Vec::<String>::new()).unwrap(), Command::Help);
        assert_eq!(Command::parse(["list", "-h"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_flag_like_product_names_are_positional() {
        assert_eq!(
            Command::parse(["create", "-h", "5"]).unwrap(),
            Command::Create {
                name: "-h".to_string(),
                price: 5.0
            }
        );
        assert_eq!(
            Command::parse(["create", "--help", "0.5"]).unwrap(),
            Command::Create {
                name: "--help".to_string(),
                price: 0.5
            }
        );
        assert_eq!(Command::parse(["--help"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_parse_errors_are_usage_errors() {
        for args in [
            vec!["create", "Widget"],
            vec!["create", "Widget", "cheap"],
            vec!["list", "--everything"],
            vec!["delete"],
        ] {
            let err = Command::parse(args.clone()).unwrap_err();
            assert!(matches!(err, CliError::Usage(_)), "{args:?}");
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[tokio::test]
    async fn test_create_then_list_prints_json() {
        let gateway: Arc<dyn ProductGateway> = Arc::new(InMemoryProductGateway::new());
        let app = app(gateway, false);

        let created = app
            .run(Command::Create {
                name: "Widget".to_string(),
                price: 9.99,
            })
            .await
            .unwrap();
        let created: serde_json::Value = serde_json::from_str(&created).unwrap();
        let id = created["id"].as_str().unwrap().to_string();

        let listed = app.run(Command::List { summary: false }).await.unwrap();
        let listed: serde_json::Value = serde_json::from_str(&listed).unwrap();
        assert_eq!(
            listed,
            serde_json::json!({
                "products": [{ "id": id, "name": "Widget", "price": 9.99, "quantity": 0 }]
            })
        );

        let summary = app.run(Command::List { summary: true }).await.unwrap();
        let summary: serde_json::Value = serde_json::from_str(&summary).unwrap();
        assert!(summary["products"][0].get("quantity").is_none());
    }

    #[tokio::test]
    async fn test_validation_failure_maps_to_usage_exit_code() {
        let gateway: Arc<dyn ProductGateway> = Arc::new(InMemoryProductGateway::new());
        let app = app(gateway, true);

        let err = app
            .run(Command::Create {
                name: String::new(),
                price: 1.0,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::Core(CoreError::Validation(_))));
        assert_eq!(err.exit_code(), 2);
    }
}
