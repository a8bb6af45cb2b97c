//! Este modulo se encarga de todo lo que toca el sistema de archivos: la
//! carpeta de salida y la escritura de los archivos generados

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errores::ErrorSistemaArchivos;

/// Se asegura de que exista la carpeta de salida, creandola si hace falta
pub fn preparar_directorio(directorio: &Path) -> Result<(), ErrorSistemaArchivos> {
    if directorio.is_dir() {
        return Ok(());
    }
    if directorio.exists() {
        return Err(ErrorSistemaArchivos::RutaNoEsDirectorio);
    }
    fs::create_dir_all(directorio)
        .map_err(|err| ErrorSistemaArchivos::NoSePudoCrearDirectorio(err.kind()))?;
    info!(directorio = %directorio.display(), "carpeta de salida creada");
    Ok(())
}

/// Escritor con buffer de un archivo de salida. Si el archivo ya existia
/// se pisa su contenido
pub struct EscritorArchivo {
    ruta: PathBuf,
    writer: BufWriter<File>,
    lineas: usize,
}

impl EscritorArchivo {
    pub fn crear(ruta: &Path) -> Result<Self, ErrorSistemaArchivos> {
        let archivo = File::create(ruta).map_err(error_de_escritura)?;
        Ok(Self {
            ruta: ruta.to_path_buf(),
            writer: BufWriter::new(archivo),
            lineas: 0,
        })
    }

    /// Escribe la linea seguida de un salto de linea
    pub fn escribir_linea(&mut self, linea: &str) -> Result<(), ErrorSistemaArchivos> {
        writeln!(self.writer, "{}", linea).map_err(error_de_escritura)?;
        self.lineas += 1;
        Ok(())
    }

    /// Vacia el buffer al disco, y devuelve la ruta junto con la cantidad
    /// de lineas escritas
    pub fn finalizar(mut self) -> Result<(PathBuf, usize), ErrorSistemaArchivos> {
        self.writer.flush().map_err(error_de_escritura)?;
        Ok((self.ruta, self.lineas))
    }
}

fn error_de_escritura(err: std::io::Error) -> ErrorSistemaArchivos {
    ErrorSistemaArchivos::NoSePudoEscribirArchivo(err.kind())
}
