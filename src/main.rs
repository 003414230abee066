use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use trello_client::{config, Client, Query};

#[derive(Parser)]
#[clap(version = "0.1")]
struct Opts {
    #[clap(short, long, default_value = "config.toml")]
    config: String,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Get(QueryArgs),
    Post(BodyArgs),
    Put(BodyArgs),
    Delete(QueryArgs),
}

#[derive(Args)]
struct QueryArgs {
    endpoint: String,
    /// Query parameter as `name=value`, repeatable.
    #[clap(short, long = "param")]
    params: Vec<String>,
}

#[derive(Args)]
struct BodyArgs {
    endpoint: String,
    /// JSON request body.
    #[clap(short, long)]
    data: Option<String>,
}

fn parse_params(params: &[String]) -> Result<Option<Query>> {
    if params.is_empty() {
        return Ok(None);
    }

    let mut query = Query::new();
    for param in params {
        let (name, value) = param
            .split_once('=')
            .ok_or_else(|| anyhow!("expected name=value, got {:?}", param))?;
        query.insert(name.to_string(), Value::String(value.to_string()));
    }
    Ok(Some(query))
}

fn parse_data(data: Option<&str>) -> Result<Option<Value>> {
    Ok(data.map(serde_json::from_str::<Value>).transpose()?)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli_opts: Opts = Opts::parse();
    let conf = config::Config::from_file(cli_opts.config.as_str())?;

    log::debug!("{:?}", conf);

    let client: Client = conf.trello.into();
    let response = match cli_opts.command {
        Command::Get(args) => {
            let params = parse_params(&args.params)?;
            client.get(&args.endpoint, params.as_ref()).await
        }
        Command::Delete(args) => {
            let params = parse_params(&args.params)?;
            client.delete(&args.endpoint, params.as_ref()).await
        }
        Command::Post(args) => {
            let data = parse_data(args.data.as_deref())?;
            client.post(&args.endpoint, data.as_ref()).await
        }
        Command::Put(args) => {
            let data = parse_data(args.data.as_deref())?;
            client.put(&args.endpoint, data.as_ref()).await
        }
    };
    client.close();

    println!("{}", serde_json::to_string_pretty(&response?)?);

    Ok(())
}
