//! Genera N archivos de texto con L lineas de palabras aleatorias cada uno,
//! en la carpeta `Output` (o la indicada con `--output-dir`).

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use verborragia::config::{Argumentos, Configuracion};
use verborragia::errores::Error;
use verborragia::generador::GeneradorArchivos;
use verborragia::palabras::DiccionarioLocal;

/// Los logs van a stderr; `RUST_LOG` tiene prioridad sobre `--verbose`
fn inicializar_logs(verbose: bool) {
    let nivel = if verbose { "debug" } else { "warn" };
    let filtro = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(nivel));
    tracing_subscriber::fmt()
        .with_env_filter(filtro)
        .with_writer(std::io::stderr)
        .init();
}

fn ejecutar(args: Argumentos) -> Result<(), Error> {
    let tam_lote = args.tam_lote as usize;
    let resumen_json = args.resumen_json;
    let config = Configuracion::try_from(args)?;

    let mut generador = GeneradorArchivos::new(config, DiccionarioLocal::new(tam_lote))?;
    let resumen = generador.ejecutar()?;

    println!("{}", resumen.renderizar(resumen_json)?);
    Ok(())
}

fn main() -> ExitCode {
    let args = Argumentos::parse();
    inicializar_logs(args.verbose);

    match ejecutar(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::FAILURE
        }
    }
}
