// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::fs;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

use the_tagsmith::config::{load_and_validate_config, ChainBuilder};
use the_tagsmith::engine::PendingNode;
use the_tagsmith::node::{render, Node};

/// A node as written in the input file.
#[derive(Debug, Deserialize)]
struct NodeSpec {
    /// Absent for a wrapper-less content node
    tag: Option<String>,
    #[serde(default)]
    attributes: Map<String, Value>,
    #[serde(default)]
    content: String,
    #[serde(default)]
    suppressed: bool,
}

impl From<NodeSpec> for Node {
    fn from(spec: NodeSpec) -> Self {
        let mut node = match spec.tag {
            Some(tag) => Node::new(tag),
            None => Node::default(),
        };
        for (name, value) in spec.attributes {
            let value = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                other => other.to_string(),
            };
            node.attributes.set(name, value);
        }
        node.content = spec.content;
        node.suppressed = spec.suppressed;
        node
    }
}

struct Args {
    config: String,
    nodes: String,
    now: Option<DateTime<Utc>>,
    roles: Vec<String>,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {} <config.(yaml|toml)> <nodes.json> [--now RFC3339] [--role ROLE]...\n\
         Example: {} configs/site.yaml configs/nodes.json --now 2025-06-15T12:00:00Z --role editor",
        program, program
    )
}

fn parse_args() -> Result<Args> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "the-tagsmith".to_string());

    let mut positional = Vec::new();
    let mut now = None;
    let mut roles = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--now" => {
                let value = args.next().context("--now needs a timestamp")?;
                let parsed = DateTime::parse_from_rfc3339(&value)
                    .with_context(|| format!("--now '{}' is not RFC 3339", value))?;
                now = Some(parsed.with_timezone(&Utc));
            }
            "--role" => roles.push(args.next().context("--role needs a name")?),
            "-h" | "--help" => bail!(usage(&program)),
            _ => positional.push(arg),
        }
    }

    match <[String; 2]>::try_from(positional) {
        Ok([config, nodes]) => Ok(Args {
            config,
            nodes,
            now,
            roles,
        }),
        Err(_) => bail!(usage(&program)),
    }
}

fn load_nodes(path: &str) -> Result<Vec<Node>> {
    let content = fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path))?;
    let specs: Vec<NodeSpec> =
        serde_json::from_str(&content).with_context(|| format!("invalid node list in '{}'", path))?;
    Ok(specs.into_iter().map(Node::from).collect())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let start_time = Instant::now();

    let config = load_and_validate_config(&args.config)
        .with_context(|| format!("failed to load '{}'", args.config))?;
    let (chain, settings) = ChainBuilder::from_config(&config)?;
    let nodes = load_nodes(&args.nodes)?;

    let mut context = settings.context().with_roles(args.roles);
    if let Some(now) = args.now {
        context = context.with_now(now);
    }

    let pending = nodes.into_iter().map(PendingNode::new).collect();
    let results = chain.run_all(pending, &context).await;

    let mut failed = 0;
    for (index, result) in results.iter().enumerate() {
        match result {
            Ok(node) => println!("{}", render(node)),
            Err(error) => {
                failed += 1;
                eprintln!("node {}: {}", index, error);
            }
        }
    }

    tracing::info!(
        nodes = results.len(),
        failed,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Render complete"
    );

    if failed > 0 {
        bail!("{} of {} nodes failed", failed, results.len());
    }
    Ok(())
}
