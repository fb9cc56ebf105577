//! # Forge Console
//!
//! Terminal front-end for the hepteract forge.
//!
//! ## Usage
//!
//! ```bash
//! forge_console --config data/hepteracts.toml --hepteracts 1e9 --quark-bonus 10
//! ```

use std::process::ExitCode;

use hepteract_economy::{
    Currency, CurrencyLedger, ForgeConfig, ForgeResult, HepteractCatalog, HepteractKind,
    QuarkStock, HEPTERACTS, QUARKS,
};
use hepteract_forge::{format_number, parse_number, Forge, ForgeUi, HelpTopic};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

/// Starting amount of every secondary currency.
const STARTING_SECONDARY: f64 = 1e150;

struct Options {
    config: Option<String>,
    hepteracts: f64,
    quark_bonus: f64,
}

impl Options {
    /// Parses command line arguments. `Ok(None)` means help was printed.
    fn parse(args: &[String]) -> Result<Option<Self>, String> {
        let mut options = Self {
            config: None,
            hepteracts: 1e9,
            quark_bonus: 0.0,
        };

        let mut i = 0;
        while i < args.len() {
            let value = args.get(i + 1);
            match (args[i].as_str(), value) {
                ("--config" | "-c", Some(path)) => options.config = Some(path.clone()),
                ("--hepteracts", Some(amount)) => options.hepteracts = parse_number(amount),
                ("--quark-bonus", Some(percent)) => options.quark_bonus = parse_number(percent),
                ("--help" | "-h", _) => {
                    println!("Usage: forge_console [OPTIONS]");
                    println!();
                    println!("Options:");
                    println!("  -c, --config <PATH>        Craft definitions (default: built-in)");
                    println!("      --hepteracts <AMOUNT>  Starting hepteracts (default: 1e9)");
                    println!("      --quark-bonus <PCT>    Bonus on purchased quarks (default: 0)");
                    println!("  -h, --help                 Show this help");
                    return Ok(None);
                }
                (flag, _) => return Err(format!("unknown or incomplete option: {flag}")),
            }
            i += 2;
        }

        if !options.hepteracts.is_finite() || options.hepteracts < 0.0 {
            return Err("--hepteracts must be a non-negative number".to_string());
        }
        if !options.quark_bonus.is_finite() {
            return Err("--quark-bonus must be a number".to_string());
        }
        Ok(Some(options))
    }
}

/// Line-based UI over stdin/stdout.
struct ConsoleUi {
    lines: Lines<BufReader<Stdin>>,
    out: Stdout,
}

impl ConsoleUi {
    fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            out: tokio::io::stdout(),
        }
    }

    async fn say(&mut self, text: &str) {
        // A closed stdout leaves nobody to tell.
        let _ = self.out.write_all(text.as_bytes()).await;
        let _ = self.out.flush().await;
    }

    async fn read_line(&mut self) -> Option<String> {
        self.lines.next_line().await.ok().flatten()
    }

    /// Next non-empty command line, or `None` at end of input.
    async fn command(&mut self) -> Option<String> {
        loop {
            self.say("forge> ").await;
            let line = self.read_line().await?;
            if !line.trim().is_empty() {
                return Some(line);
            }
        }
    }
}

impl ForgeUi for ConsoleUi {
    async fn alert(&mut self, message: &str) {
        self.say(&format!("{message}\n")).await;
    }

    async fn confirm(&mut self, message: &str) -> bool {
        self.say(&format!("{message} [y/N] ")).await;
        matches!(
            self.read_line().await.as_deref().map(str::trim),
            Some("y" | "Y" | "yes" | "Yes")
        )
    }

    async fn prompt(&mut self, message: &str) -> Option<String> {
        self.say(&format!("{message} ")).await;
        // An empty line dismisses the prompt.
        self.read_line().await.filter(|line| !line.trim().is_empty())
    }
}

fn starting_ledger(catalog: &HepteractCatalog, options: &Options) -> CurrencyLedger {
    let mut ledger = CurrencyLedger::new().with_currency(HEPTERACTS, options.hepteracts);
    for currency in catalog.required_currencies() {
        ledger.insert(currency, STARTING_SECONDARY);
    }
    ledger.insert(
        QUARKS,
        Currency::Quark(QuarkStock::new(STARTING_SECONDARY, options.quark_bonus)),
    );
    ledger
}

const COMMANDS: &str = "\
commands:
  list                    every hepteract and its inventory
  describe <kind>         forge panel for one hepteract
  unlock <kind>           unlock a hepteract
  craft <kind>            craft (asks how many)
  expand <kind>           double capacity of a full inventory
  spend <kind> <amount>   spend from an inventory
  discount <kind> <amt>   add discount
  exchange                buy quarks with hepteracts
  balances                show the ledger
  save <path>             write current crafts as TOML
  help [topic]            game help (coin, diamond, rune, mythos, challenge)
  quit";

async fn run(options: Options) -> ForgeResult<()> {
    let config = match &options.config {
        Some(path) => ForgeConfig::load(path)?,
        None => ForgeConfig::builtin()?,
    };
    let catalog = HepteractCatalog::from_config(&config)?;
    let ledger = starting_ledger(&catalog, &options);
    let mut forge = Forge::new(catalog, ledger, ConsoleUi::new());

    forge
        .ui_mut()
        .alert("Type 'commands' for a list.")
        .await;

    while let Some(line) = forge.ui_mut().command().await {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = words.first() else {
            continue;
        };
        let kind = words.get(1).and_then(|key| HepteractKind::from_key(key));
        let amount = words.get(2).map_or(f64::NAN, |word| parse_number(word));

        let reply: Vec<String> = match (command, kind) {
            ("quit" | "exit", _) => break,
            ("commands", _) => vec![COMMANDS.to_string()],
            ("list", _) => forge
                .catalog()
                .iter()
                .map(|(kind, craft)| {
                    let lock = if craft.is_unlocked() { " " } else { "*" };
                    let full = if craft.is_full() { "  (full)" } else { "" };
                    format!(
                        "{lock} {:<20} {} / {}{full}",
                        kind.key(),
                        format_number(craft.balance(), 0, true),
                        format_number(craft.capacity(), 0, false)
                    )
                })
                .collect(),
            ("describe", Some(kind)) => {
                let text = forge.describe(kind);
                vec![text.unlocked, text.effect, text.current_effect, text.inventory, text.cost]
            }
            ("unlock", Some(kind)) => {
                if forge.unlock(kind).await {
                    Vec::new()
                } else {
                    vec!["Already unlocked.".to_string()]
                }
            }
            ("craft", Some(kind)) => match forge.craft(kind).await.done() {
                Some(receipt) if receipt.is_short() => {
                    vec![format!("Limited by: {:?}", receipt.limited_by)]
                }
                _ => Vec::new(),
            },
            ("expand", Some(kind)) => {
                forge.expand(kind).await;
                Vec::new()
            }
            ("spend", Some(kind)) if amount.is_finite() => {
                let balance = forge.spend(kind, amount).balance();
                vec![format!("Inventory: {}", format_number(balance, 0, true))]
            }
            ("discount", Some(kind)) if amount.is_finite() => {
                let discount = forge.add_discount(kind, amount).discount();
                vec![format!("Discount: {}", format_number(discount, 4, false))]
            }
            ("spend" | "discount", Some(_)) => vec![format!("{command} needs a number")],
            ("exchange", _) => {
                let panel = forge.describe_quark_exchange();
                forge.ui_mut().alert(&panel.effect).await;
                forge.ui_mut().alert(&panel.cost).await;
                forge.trade_for_quarks().await;
                Vec::new()
            }
            ("balances", _) => {
                let ledger = forge.ledger();
                let mut lines: Vec<String> = ledger
                    .names()
                    .map(|name| {
                        let value = ledger.balance(name).unwrap_or(f64::NAN);
                        format!("{name:<20} {}", format_number(value, 2, true))
                    })
                    .collect();
                if let Some(Currency::Quark(store)) = ledger.get(QUARKS) {
                    lines.push(format!(
                        "Quark purchases get a {}% bonus.",
                        format_number(store.bonus_percent(), 2, false)
                    ));
                }
                lines
            }
            ("save", _) => match words.get(1) {
                Some(path) => {
                    let text = forge.catalog().to_config().to_toml_string()?;
                    match std::fs::write(path, text) {
                        Ok(()) => vec![format!("Saved to {path}")],
                        Err(e) => vec![format!("Could not save to {path}: {e}")],
                    }
                }
                None => vec!["save needs a path".to_string()],
            },
            ("help", _) => match words.get(1) {
                Some(id) => match HelpTopic::from_id(id) {
                    Some(topic) => vec![topic.text().to_string()],
                    None => vec![format!("No help for '{id}'")],
                },
                None => {
                    let ids: Vec<&str> = HelpTopic::ALL.iter().map(|topic| topic.id()).collect();
                    vec![format!("help topics: {}", ids.join(", "))]
                }
            },
            (_, None) if words.len() > 1 => {
                vec![format!("'{command}': unknown hepteract '{}'", words[1])]
            }
            _ => vec![format!("'{command}' is not a command (try 'commands')")],
        };

        for line in reply {
            forge.ui_mut().alert(&line).await;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║         HEPTERACT FORGE                                          ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Options::parse(&args) {
        Ok(Some(options)) => options,
        Ok(None) => return ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: cannot start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(options)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
