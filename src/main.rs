use chrono::Local;
use clap::{Args, Parser, Subcommand};
use gestor_novedades::config::env_loader::load_config;
use gestor_novedades::config::model::Config;
use gestor_novedades::gestor::{Gestor, GestorError, SubmitStatus};
use gestor_novedades::novedades::api::NovedadesAPI;
use gestor_novedades::novedades::model::NoticeForm;
use gestor_novedades::render::render_list;
use gestor_novedades::tracing::setup_tracing;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;

const PROGRESS_POLL: Duration = Duration::from_millis(50);

/// Manage the notices ("novedades") of the remote collection.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List notices, earliest deadline first
    Listar {
        /// Case-insensitive text matched against name, place and details
        #[arg(long, default_value = "")]
        buscar: String,
    },
    /// Create a notice
    Agregar(NewNoticeArgs),
    /// Edit a notice. Omitted fields keep their current value
    Editar {
        id: String,
        #[command(flatten)]
        fields: EditNoticeArgs,
    },
    /// Delete a notice
    Eliminar { id: String },
}

#[derive(Args, Debug)]
struct NewNoticeArgs {
    #[arg(long, default_value = "")]
    nombre: String,
    #[arg(long, default_value = "")]
    lugar: String,
    #[arg(long, default_value = "")]
    horario: String,
    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    fecha_fin: String,
    #[arg(long, default_value = "")]
    detalles: String,
}

#[derive(Args, Debug)]
struct EditNoticeArgs {
    #[arg(long)]
    nombre: Option<String>,
    #[arg(long)]
    lugar: Option<String>,
    #[arg(long)]
    horario: Option<String>,
    #[arg(long)]
    fecha_fin: Option<String>,
    #[arg(long)]
    detalles: Option<String>,
}

impl From<NewNoticeArgs> for NoticeForm {
    fn from(args: NewNoticeArgs) -> Self {
        NoticeForm {
            name: args.nombre,
            place: args.lugar,
            schedule: args.horario,
            end_date: args.fecha_fin,
            details: args.detalles,
        }
    }
}

impl EditNoticeArgs {
    fn apply(self, form: &mut NoticeForm) {
        let fields = [
            (self.nombre, &mut form.name),
            (self.lugar, &mut form.place),
            (self.horario, &mut form.schedule),
            (self.fecha_fin, &mut form.end_date),
            (self.detalles, &mut form.details),
        ];

        for (value, field) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let loki = setup_tracing().await;
    let config = load_config();

    info!("Using API at {}", config.api_url);

    let result = run(cli.command, &config).await;

    if let Some(loki) = loki {
        loki.shutdown().await;
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &Config) -> Result<(), GestorError> {
    let mut gestor = Gestor::new(NovedadesAPI::new(&config.api_url));

    gestor.load().await?;

    match command {
        Command::Listar { buscar } => {
            gestor.search = buscar;
        }
        Command::Agregar(args) => {
            gestor.form = args.into();
            let status = gestor.submit_status();
            let (result, ()) = tokio::join!(gestor.add(), show_progress(&status));
            result?;
        }
        Command::Editar { id, fields } => {
            gestor.start_edit(&id)?;
            if let Some(form) = gestor.edit_form_mut() {
                fields.apply(form);
            }
            gestor.save_edit().await?;
        }
        Command::Eliminar { id } => {
            gestor.delete(&id).await?;
        }
    }

    let view = gestor.view(Local::now().naive_local());
    println!("{}", render_list(&view, &config.render_config));

    Ok(())
}

/// Shows the busy label for as long as the create request is outstanding
async fn show_progress(status: &SubmitStatus) {
    tokio::time::sleep(PROGRESS_POLL).await;

    if status.is_submitting() {
        eprintln!("{}", status.label());
    }

    while status.is_submitting() {
        tokio::time::sleep(PROGRESS_POLL).await;
    }
}
