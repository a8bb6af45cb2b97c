//! Este modulo define los argumentos que recibe el generador por linea de
//! comandos, y la configuracion ya normalizada con la que trabaja.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::aliases::{CantidadArchivos, CantidadLineas, ListaSesgo, NumeroArchivo};
use crate::errores::ErrorArgumentos;
use crate::{DIRECTORIO_SALIDA, MAX_REINTENTOS_DEFECTO, NOMBRE_BASE_DEFECTO, TAM_LOTE_DEFECTO};

/// Genera N archivos con L lineas, usando palabras completas aleatorias.
/// Se puede incluir una lista de palabras si se quiere que ciertas palabras
/// aparezcan de forma aleatoria.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Argumentos {
    /// Number of files to create
    #[arg(value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub cantidad_archivos: CantidadArchivos,

    /// Number of lines to add to each file
    #[arg(value_name = "L", value_parser = clap::value_parser!(u32).range(1..))]
    pub cantidad_lineas: CantidadLineas,

    /// Word list should you want specific words included
    #[arg(short = 'w', long = "word-list", value_name = "TEXT", num_args = 0..)]
    pub lista_palabras: Option<Vec<String>>,

    /// JSON file with an array of words, appended to the word list
    #[arg(short = 'f', long = "word-list-file", value_name = "PATH")]
    pub archivo_lista: Option<PathBuf>,

    /// File number to start with.
    #[arg(short = 's', long = "start-number", value_name = "TEXT", allow_hyphen_values = true)]
    pub numero_inicial: Option<String>,

    /// Name used to generate files.
    #[arg(short = 'n', long = "file-name", value_name = "TEXT")]
    pub nombre_archivo: Option<String>,

    /// Instead of uniform filenames, use a random filename each time.
    #[arg(short = 'r', long = "random-file-name", default_value_t = false)]
    pub nombre_aleatorio: bool,

    /// Folder where the files are written
    #[arg(short = 'o', long = "output-dir", value_name = "PATH", default_value = DIRECTORIO_SALIDA)]
    pub directorio: PathBuf,

    /// Attempts to get a non empty batch of words before giving up
    #[arg(
        long = "max-retries",
        default_value_t = MAX_REINTENTOS_DEFECTO,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_reintentos: u32,

    /// Words fetched from the dictionary for each file
    #[arg(
        long = "batch-size",
        default_value_t = TAM_LOTE_DEFECTO as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub tam_lote: u32,

    /// Print the run summary as JSON
    #[arg(long = "json-summary", default_value_t = false)]
    pub resumen_json: bool,

    /// Log every step of the generation
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Configuracion del generador, con todos los campos opcionales ya
/// resueltos a sus valores por defecto
#[derive(Debug, Clone, PartialEq)]
pub struct Configuracion {
    pub cantidad_archivos: CantidadArchivos,
    pub cantidad_lineas: CantidadLineas,
    pub lista_sesgo: Option<ListaSesgo>,
    pub numero_inicial: NumeroArchivo,
    pub nombre_base: String,
    pub nombre_aleatorio: bool,
    pub directorio: PathBuf,
    pub max_reintentos: u32,
}

impl Configuracion {
    /// Crea una configuracion con las cantidades dadas y el resto de los
    /// campos en sus valores por defecto
    pub fn new(cantidad_archivos: CantidadArchivos, cantidad_lineas: CantidadLineas) -> Self {
        Self {
            cantidad_archivos,
            cantidad_lineas,
            lista_sesgo: None,
            numero_inicial: 0,
            nombre_base: NOMBRE_BASE_DEFECTO.to_string(),
            nombre_aleatorio: false,
            directorio: PathBuf::from(DIRECTORIO_SALIDA),
            max_reintentos: MAX_REINTENTOS_DEFECTO,
        }
    }

    /// Valida las cantidades y normaliza la lista de sesgo: una lista vacia
    /// equivale a no haber pasado ninguna
    pub fn normalizar(mut self) -> Result<Self, ErrorArgumentos> {
        if self.cantidad_archivos == 0 || self.cantidad_lineas == 0 || self.max_reintentos == 0 {
            return Err(ErrorArgumentos::CantidadInvalida);
        }
        let ultimo = NumeroArchivo::from(self.cantidad_archivos - 1);
        if self.numero_inicial.checked_add(ultimo).is_none() {
            return Err(ErrorArgumentos::NumeracionDesbordada);
        }
        if self.lista_sesgo.as_ref().is_some_and(|lista| lista.is_empty()) {
            self.lista_sesgo = None;
        }
        Ok(self)
    }
}

impl TryFrom<Argumentos> for Configuracion {
    type Error = ErrorArgumentos;

    fn try_from(args: Argumentos) -> Result<Self, Self::Error> {
        let mut lista_sesgo = args.lista_palabras;
        if let Some(ruta) = &args.archivo_lista {
            let del_archivo = leer_lista_palabras(ruta)?;
            lista_sesgo.get_or_insert_with(Vec::new).extend(del_archivo);
        }

        let numero_inicial = match &args.numero_inicial {
            Some(texto) => parsear_numero_inicial(texto)?,
            None => 0,
        };

        Self {
            lista_sesgo,
            numero_inicial,
            nombre_base: args
                .nombre_archivo
                .unwrap_or_else(|| NOMBRE_BASE_DEFECTO.to_string()),
            nombre_aleatorio: args.nombre_aleatorio,
            directorio: args.directorio,
            max_reintentos: args.max_reintentos,
            ..Self::new(args.cantidad_archivos, args.cantidad_lineas)
        }
        .normalizar()
    }
}

/// Parsea el numero con el que se empiezan a numerar los archivos
pub fn parsear_numero_inicial(texto: &str) -> Result<NumeroArchivo, ErrorArgumentos> {
    texto
        .trim()
        .parse()
        .map_err(|_| ErrorArgumentos::NumeroInicialInvalido(texto.to_string()))
}

/// A partir de un reader en formato json, obtiene una lista de palabras.
/// Simplemente encapsula las funcionalidades de la libreria de json.
pub fn from_reader(reader: &mut dyn Read) -> Result<ListaSesgo, serde_json::Error> {
    serde_json::from_reader(reader)
}

/// Lee una lista de palabras de un archivo json
pub fn leer_lista_palabras(ruta: &Path) -> Result<ListaSesgo, ErrorArgumentos> {
    let archivo = File::open(ruta).map_err(|_| ErrorArgumentos::ListaDePalabrasIlegible)?;
    let lista = from_reader(&mut BufReader::new(archivo))?;
    Ok(lista)
}
