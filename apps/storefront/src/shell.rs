//! # Event Shell
//!
//! Drives a session from text lines, one UI event per line.
//!
//! ## Line Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin                        stdout                                    │
//! │  ─────                        ──────                                    │
//! │  add 1            ──────────► { "lines": [...], "totals": {...} }       │
//! │  approve ORD001   ──────────► { "code": "FORBIDDEN", "message": ... }   │
//! │  role admin       ──────────► { "route": "/", "role": "admin", ... }    │
//! │  approve ORD001   ──────────► { "id": "ORD001", "status": "approved" }  │
//! │  quit             ──────────► (session ends)                            │
//! │                                                                         │
//! │  Every reply is pretty-printed JSON. Errors are replies too; the        │
//! │  shell keeps reading after them. Blank lines are skipped.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;
use tihar_core::validation::{validate_product_id, validate_quantity_input};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::commands::{cart, checkout, donation, nav, order, product};
use crate::error::ApiError;
use crate::state::AppState;

const HELP: &[&str] = &[
    "products [category|all] [query]   list products",
    "product <id>                      show one product",
    "featured                          home page products",
    "categories                        category buttons",
    "cart                              show the cart",
    "add <id>                          add one unit to the cart",
    "qty <id> <quantity>               set a line's quantity (0 removes)",
    "rm <id>                           remove a line",
    "checkout                          place the order",
    "orders [status]                   list orders (admin)",
    "approve <order id>                approve an order (admin)",
    "reject <order id>                 reject an order (admin)",
    "stats                             order statistics (admin)",
    "inventory                         product stock (admin)",
    "programs                          donation programs and presets",
    "donate <program> <amount>         submit a donation",
    "go <path>                         navigate, e.g. go /donate",
    "role <customer|admin|ngo>         switch role",
    "session                           header state",
    "help                              this list",
    "quit                              end the session",
];

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Products {
        category: Option<String>,
        query: Option<String>,
    },
    Product(u32),
    Featured,
    Categories,
    Cart,
    Add(u32),
    Qty(u32, i64),
    Rm(u32),
    Checkout,
    Orders(Option<String>),
    Approve(String),
    Reject(String),
    Stats,
    Inventory,
    Programs,
    Donate { program: String, amount: String },
    Go(String),
    Role(String),
    Session,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();

        let command = match verb.as_str() {
            "products" => {
                let category = Some(next_word(&mut words)).filter(|c| !c.is_empty());
                let rest: Vec<&str> = words.collect();
                let query = Some(rest.join(" ")).filter(|q| !q.is_empty());
                ShellCommand::Products { category, query }
            }
            "product" => ShellCommand::Product(validate_product_id(&next_word(&mut words))?),
            "featured" => ShellCommand::Featured,
            "categories" => ShellCommand::Categories,
            "cart" => ShellCommand::Cart,
            "add" => ShellCommand::Add(validate_product_id(&next_word(&mut words))?),
            "qty" => {
                let id = validate_product_id(&next_word(&mut words))?;
                ShellCommand::Qty(id, validate_quantity_input(&next_word(&mut words))?)
            }
            "rm" => ShellCommand::Rm(validate_product_id(&next_word(&mut words))?),
            "checkout" => ShellCommand::Checkout,
            "orders" => ShellCommand::Orders(Some(next_word(&mut words)).filter(|s| !s.is_empty())),
            "approve" => ShellCommand::Approve(next_word(&mut words)),
            "reject" => ShellCommand::Reject(next_word(&mut words)),
            "stats" => ShellCommand::Stats,
            "inventory" => ShellCommand::Inventory,
            "programs" => ShellCommand::Programs,
            "donate" => {
                let program = next_word(&mut words);
                ShellCommand::Donate {
                    program,
                    amount: next_word(&mut words),
                }
            }
            "go" => ShellCommand::Go(next_word(&mut words)),
            "role" => ShellCommand::Role(next_word(&mut words)),
            "session" => ShellCommand::Session,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => {
                return Err(ApiError::validation(format!(
                    "Unknown command '{}'. Type 'help' for a list.",
                    other
                )))
            }
        };
        Ok(command)
    }
}

/// Next argument, or an empty string when the line ran out. Commands
/// report missing arguments through their own validation.
fn next_word<'a>(words: &mut impl Iterator<Item = &'a str>) -> String {
    words.next().unwrap_or_default().to_string()
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Output(Value),
    Quit,
}

fn to_json<T: Serialize>(value: T) -> Result<Reply, ApiError> {
    serde_json::to_value(value)
        .map(Reply::Output)
        .map_err(|e| ApiError::internal(e.to_string()))
}

/// Runs one command against the session.
pub fn dispatch(state: &AppState, command: &ShellCommand) -> Result<Reply, ApiError> {
    match command {
        ShellCommand::Products { category, query } => to_json(product::list_products(
            state,
            category.as_deref(),
            query.as_deref(),
        )?),
        ShellCommand::Product(id) => to_json(product::get_product(state, *id)?),
        ShellCommand::Featured => to_json(product::featured_products(state)),
        ShellCommand::Categories => to_json(product::list_categories(state)),
        ShellCommand::Cart => to_json(cart::get_cart(state)),
        ShellCommand::Add(id) => to_json(cart::add_to_cart(state, *id)?),
        ShellCommand::Qty(id, quantity) => {
            to_json(cart::update_cart_item(state, *id, *quantity)?)
        }
        ShellCommand::Rm(id) => to_json(cart::remove_from_cart(state, *id)?),
        ShellCommand::Checkout => to_json(checkout::checkout(state)?),
        ShellCommand::Orders(status) => to_json(order::list_orders(state, status.as_deref())?),
        ShellCommand::Approve(id) => to_json(order::approve_order(state, id)?),
        ShellCommand::Reject(id) => to_json(order::reject_order(state, id)?),
        ShellCommand::Stats => to_json(order::order_stats(state)?),
        ShellCommand::Inventory => to_json(order::inventory(state)?),
        ShellCommand::Programs => to_json(donation::list_programs(state)),
        ShellCommand::Donate { program, amount } => {
            to_json(donation::submit_donation(state, program, amount)?)
        }
        ShellCommand::Go(path) => to_json(nav::navigate(state, path)?),
        ShellCommand::Role(role) => to_json(nav::set_role(state, role)?),
        ShellCommand::Session => to_json(nav::session(state)),
        ShellCommand::Help => to_json(HELP),
        ShellCommand::Quit => Ok(Reply::Quit),
    }
}

/// Reads commands from `reader` until EOF or `quit`, writing each reply to
/// `writer`.
///
/// Must run inside a tokio runtime (checkout and donations spawn timers).
pub async fn run<R, W>(state: &AppState, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        debug!(line = %line, "shell input");

        let reply = line
            .parse::<ShellCommand>()
            .and_then(|command| dispatch(state, &command));

        let text = match reply {
            Ok(Reply::Quit) => break,
            Ok(Reply::Output(value)) => serde_json::to_string_pretty(&value)?,
            Err(e) => {
                warn!(code = ?e.code, message = %e.message, "Command failed");
                serde_json::to_string_pretty(&e)?
            }
        };

        writer.write_all(text.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replies(output: &[u8]) -> Vec<Value> {
        serde_json::Deserializer::from_slice(output)
            .into_iter::<Value>()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("add 3".parse::<ShellCommand>().unwrap(), ShellCommand::Add(3));
        assert_eq!(
            "qty 1 -2".parse::<ShellCommand>().unwrap(),
            ShellCommand::Qty(1, -2)
        );
        assert_eq!(
            "products textiles hand woven".parse::<ShellCommand>().unwrap(),
            ShellCommand::Products {
                category: Some("textiles".to_string()),
                query: Some("hand woven".to_string()),
            }
        );
        assert_eq!(
            "products".parse::<ShellCommand>().unwrap(),
            ShellCommand::Products {
                category: None,
                query: None
            }
        );
        assert_eq!(
            "DONATE skill 500".parse::<ShellCommand>().unwrap(),
            ShellCommand::Donate {
                program: "skill".to_string(),
                amount: "500".to_string(),
            }
        );
        assert_eq!("orders".parse::<ShellCommand>().unwrap(), ShellCommand::Orders(None));
        assert_eq!(
            "inventory".parse::<ShellCommand>().unwrap(),
            ShellCommand::Inventory
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!("add".parse::<ShellCommand>().is_err());
        assert!("add soap".parse::<ShellCommand>().is_err());
        assert!("qty 1".parse::<ShellCommand>().is_err());
        assert!("dance".parse::<ShellCommand>().is_err());
    }

    #[tokio::test]
    async fn test_shell_session() {
        let state = AppState::default();
        let input = b"add 1\n\nadd 1\nadd 2\ncart\napprove ORD001\nquit\nadd 3\n";
        let mut output = Vec::new();

        run(&state, &input[..], &mut output).await.unwrap();

        let replies = replies(&output);
        assert_eq!(replies.len(), 5);
        assert_eq!(replies[3]["totals"]["total"], 180);
        assert_eq!(replies[3]["totals"]["count"], 3);
        assert_eq!(replies[4]["code"], "FORBIDDEN");

        // Nothing after quit runs
        assert_eq!(state.cart.with_cart(|c| c.count()), 3);
    }

    #[tokio::test]
    async fn test_oversized_quantity_is_rejected() {
        let state = AppState::default();
        let input = b"add 1\nqty 1 9223372036854775807\nqty 1 1000\nqty 1 999\n";
        let mut output = Vec::new();

        run(&state, &input[..], &mut output).await.unwrap();

        let replies = replies(&output);
        assert_eq!(replies.len(), 4);
        assert_eq!(replies[1]["code"], "VALIDATION_ERROR");
        assert_eq!(replies[2]["code"], "VALIDATION_ERROR");
        assert_eq!(replies[3]["totals"]["count"], 999);
        assert_eq!(state.cart.with_cart(|c| c.count()), 999);
    }

    #[tokio::test]
    async fn test_admin_flow_through_shell() {
        let state = AppState::default();
        let input = b"role admin\ngo /admin\nreject ORD001\napprove ORD001\nstats\n";
        let mut output = Vec::new();

        run(&state, &input[..], &mut output).await.unwrap();

        let replies = replies(&output);
        assert_eq!(replies[1]["route"], "/admin");
        assert_eq!(replies[2]["status"], "rejected");
        assert_eq!(replies[3]["code"], "BUSINESS_LOGIC");
        assert_eq!(replies[4]["rejected"], 1);
        assert_eq!(replies[4]["pending"], 1);
    }

    #[tokio::test]
    async fn test_help_lists_commands() {
        let state = AppState::default();
        let Reply::Output(value) = dispatch(&state, &ShellCommand::Help).unwrap() else {
            panic!("help should produce output");
        };
        assert_eq!(value.as_array().map(Vec::len), Some(HELP.len()));
    }
}
