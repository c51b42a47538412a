//! appraisal-engine CLI
//!
//! Run loan appraisals from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Appraise an application from a JSON file
//! appraisal-engine appraise --input application.json
//!
//! # Output as JSON, under the legacy threshold revision
//! appraisal-engine appraise --input application.json --policy legacy --format json
//!
//! # List the product catalogue
//! appraisal-engine products
//!
//! # Generate a random application for testing
//! appraisal-engine generate --product express --complete
//! ```

use appraisal_engine::core::application::ApplicationInput;
use appraisal_engine::core::product::LoanProduct;
use appraisal_engine::core::result::AppraisalResult;
use appraisal_engine::engine::appraisal::AppraisalEngine;
use appraisal_engine::engine::catalog;
use appraisal_engine::policy::thresholds::PolicyConfig;
use appraisal_engine::simulation::scenario::{
    generate_complete_application, generate_random_application, ScenarioConfig,
};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"appraisal-engine — policy-rubric loan appraisal and scoring

USAGE:
    appraisal-engine <COMMAND> [OPTIONS]

COMMANDS:
    appraise    Score an application against its product's criteria table
    products    List the product catalogue and maximum attainable scores
    generate    Generate a random application (for testing)
    help        Show this message

OPTIONS (appraise):
    --input <FILE>      Path to JSON application file
    --policy <NAME>     Threshold revision: current (default) or legacy
    --format <FORMAT>   Output format: text (default) or json

OPTIONS (generate):
    --product <CODE>    Product code (default: mortgage)
    --complete          Satisfy every criterion instead of randomizing
    --output <FILE>     Write to file instead of stdout

EXAMPLES:
    appraisal-engine appraise --input application.json
    appraisal-engine appraise --input application.json --policy legacy --format json
    appraisal-engine products
    appraisal-engine generate --product container --complete --output app.json"#
    );
}

/// JSON schema for input applications.
#[derive(serde::Deserialize)]
struct ApplicationFile {
    product: String,
    fields: ApplicationInput,
}

/// JSON output schema for appraisal results.
#[derive(serde::Serialize)]
struct AppraisalOutput<'a> {
    policy: &'a str,
    #[serde(flatten)]
    result: &'a AppraisalResult,
}

fn load_application(path: &str) -> ApplicationFile {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing JSON: {}", e);
        eprintln!("Expected format:");
        eprintln!(
            r#"{{
  "product": "mortgage",
  "fields": {{
    "loan_amount": "20000000",
    "annual_interest_rate_percent": "12",
    "loan_term_years": "5",
    "borrower_gross_monthly_income": "2500000",
    "land_title_document": true,
    "profession": "Trader"
  }}
}}"#
        );
        process::exit(1);
    })
}

fn resolve_policy(name: &str) -> PolicyConfig {
    match name {
        "current" => PolicyConfig::current(),
        "legacy" => PolicyConfig::legacy(),
        _ => {
            eprintln!("Unknown policy '{}': expected 'current' or 'legacy'", name);
            process::exit(1);
        }
    }
}

fn cmd_appraise(args: &[String]) {
    let mut input_path = None;
    let mut policy_name = "current".to_string();
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--policy" => {
                i += 1;
                policy_name = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--policy requires 'current' or 'legacy'");
                    process::exit(1);
                });
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = input_path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    let file = load_application(&path);
    let policy = resolve_policy(&policy_name);
    let result = AppraisalEngine::appraise_code(&file.product, &file.fields, &policy);

    if format == "json" {
        let output = AppraisalOutput {
            policy: &policy.name,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("{}", result);
        println!("Policy revision: {}", policy.name);
    }
}

fn cmd_products() {
    println!("{:<16} {:<22} {:>9} {:>13}", "CODE", "NAME", "CRITERIA", "MAX SCORE");
    for product in LoanProduct::ALL {
        println!(
            "{:<16} {:<22} {:>9} {:>13}",
            product.code(),
            product.display_name(),
            catalog::criteria_for(product).len(),
            catalog::max_attainable(product).to_string(),
        );
    }
}

fn cmd_generate(args: &[String]) {
    let mut product_code = "mortgage".to_string();
    let mut complete = false;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--product" => {
                i += 1;
                product_code = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--product requires a product code");
                    process::exit(1);
                });
            }
            "--complete" => {
                complete = true;
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let product = LoanProduct::from_code(&product_code).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    let input = if complete {
        generate_complete_application(product)
    } else {
        generate_random_application(product, &ScenarioConfig::default())
    };

    #[derive(serde::Serialize)]
    struct OutputFile<'a> {
        product: &'a str,
        fields: &'a ApplicationInput,
    }

    let json = serde_json::to_string_pretty(&OutputFile {
        product: product.code(),
        fields: &input,
    })
    .unwrap();

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Generated {} application → {}", product.code(), path);
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "appraise" => cmd_appraise(rest),
        "products" => cmd_products(),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
