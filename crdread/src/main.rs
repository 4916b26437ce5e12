use clap::Parser;
use clap::Subcommand;
use kubecrd_provider::Provider;
use kubecrd_provider::ProviderConfig;
use kubecrd_provider::ReadRequest;
use log;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about = "Read Kubernetes custom resources the way the k8s data sources do")]
struct Args {

    /// Fail every read without contacting a cluster
    #[arg(long, env = "K8S_OFFLINE")]
    offline: bool,

    /// kubeconfig file to use instead of the default inference chain
    #[arg(long, env = "KUBECONFIG")]
    kubeconfig: Option<PathBuf>,

    /// kubeconfig context to use
    #[arg(long, env = "K8S_CONTEXT")]
    context: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {

    /// List the registered data source type names
    List,

    /// Print the attribute schema of a data source
    Schema {
	type_name: String,
    },

    /// Read one object and print the resulting state
    Read {
	type_name: String,

	#[arg(long)]
	name: String,

	#[arg(long, short = 'n')]
	namespace: String,
    },
}

impl Args {
    fn provider_config(&self) -> ProviderConfig {
	ProviderConfig{
	    offline: self.offline,
	    kubeconfig: self.kubeconfig.clone(),
	    context: self.context.clone(),
	}
    }
}

fn print_json(value: &impl serde::Serialize) -> ExitCode {
    match serde_json::to_string_pretty(value) {
	Ok(out) => {
	    println!("{}", out);
	    ExitCode::SUCCESS
	},
	Err(err) => {
	    log::error!("Unable to render output: {}", err);
	    ExitCode::FAILURE
	}
    }
}

async fn read(provider: &mut Provider, type_name: &str, name: &str, namespace: &str) -> ExitCode {
    if let Err(err) = provider.configure().await {
	log::error!("Unable to configure the provider: {}", err);
	return ExitCode::FAILURE;
    }

    let req = ReadRequest{
	config: json!({"metadata": {"name": name, "namespace": namespace}}),
    };
    let resp = provider.read(type_name, req).await;

    for diagnostic in resp.diagnostics.iter() {
	eprintln!("{}\n", diagnostic);
    }

    match resp.state {
	Some(state) if !resp.diagnostics.has_error() => print_json(&state),
	_ => ExitCode::FAILURE,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let mut provider = match Provider::new(args.provider_config()) {
	Ok(provider) => provider,
	Err(err) => {
	    log::error!("Unable to build the provider: {}", err);
	    return ExitCode::FAILURE;
	}
    };

    match &args.command {
	Command::List => {
	    for type_name in provider.type_names() {
		println!("{}", type_name);
	    }
	    ExitCode::SUCCESS
	},
	Command::Schema { type_name } => match provider.data_source(type_name) {
	    Some(data_source) => print_json(data_source.schema()),
	    None => {
		log::error!("Unknown data source {}, try `crdread list`", type_name);
		ExitCode::FAILURE
	    }
	},
	Command::Read { type_name, name, namespace } => {
	    log::info!("reading {} {}/{}", type_name, namespace, name);
	    read(&mut provider, type_name, name, namespace).await
	},
    }
}
