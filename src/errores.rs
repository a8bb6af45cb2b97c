//! Este modulo define tipos de errores que pueden darse en
//! la ejecucion

use std::fmt;
use std::io;

/// Enumerativo que engloba a todos los tipos de errores posibles desde
/// todos los modulos
#[derive(Debug)]
pub enum Error {
    ErrorDeArgumentos(ErrorArgumentos),
    ErrorDeSistemaArchivos(ErrorSistemaArchivos),
    ErrorDeFuente(ErrorFuente),
    ErrorDeResumen(String),
}

impl From<ErrorArgumentos> for Error {
    fn from(err: ErrorArgumentos) -> Self {
        Error::ErrorDeArgumentos(err)
    }
}

impl From<ErrorSistemaArchivos> for Error {
    fn from(err: ErrorSistemaArchivos) -> Self {
        Error::ErrorDeSistemaArchivos(err)
    }
}

impl From<ErrorFuente> for Error {
    fn from(err: ErrorFuente) -> Self {
        Error::ErrorDeFuente(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ErrorDeResumen(err.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ErrorDeArgumentos(err) => write!(f, "argumentos invalidos: {err}"),
            Self::ErrorDeSistemaArchivos(err) => write!(f, "error de sistema de archivos: {err}"),
            Self::ErrorDeFuente(err) => write!(f, "error en la fuente de palabras: {err}"),
            Self::ErrorDeResumen(err) => write!(f, "no se pudo serializar el resumen: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// Enumerativo que define los errores en los argumentos recibidos, que
/// se detectan antes de generar cualquier archivo
#[derive(Debug, PartialEq)]
pub enum ErrorArgumentos {
    CantidadInvalida,
    NumeroInicialInvalido(String),
    NumeracionDesbordada,
    ListaDePalabrasIlegible,
    ListaDePalabrasInvalida,
}

impl From<serde_json::Error> for ErrorArgumentos {
    fn from(_err: serde_json::Error) -> Self {
        ErrorArgumentos::ListaDePalabrasInvalida
    }
}

impl fmt::Display for ErrorArgumentos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CantidadInvalida => write!(f, "las cantidades deben ser mayores a cero"),
            Self::NumeroInicialInvalido(valor) => {
                write!(f, "no se puede parsear {valor:?} como numero inicial")
            }
            Self::NumeracionDesbordada => {
                write!(f, "la numeracion de los archivos excede el rango de enteros")
            }
            Self::ListaDePalabrasIlegible => write!(f, "no se pudo abrir la lista de palabras"),
            Self::ListaDePalabrasInvalida => {
                write!(f, "la lista de palabras debe ser un arreglo json de strings")
            }
        }
    }
}

/// Enumerativo que define los errores al crear la carpeta de salida
/// o al escribir los archivos
#[derive(Debug, PartialEq)]
pub enum ErrorSistemaArchivos {
    NoSePudoCrearDirectorio(io::ErrorKind),
    NoSePudoEscribirArchivo(io::ErrorKind),
    RutaNoEsDirectorio,
}

impl fmt::Display for ErrorSistemaArchivos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSePudoCrearDirectorio(kind) => {
                write!(f, "no se pudo crear la carpeta de salida ({kind})")
            }
            Self::NoSePudoEscribirArchivo(kind) => {
                write!(f, "no se pudo escribir el archivo ({kind})")
            }
            Self::RutaNoEsDirectorio => write!(f, "la ruta de salida existe y no es una carpeta"),
        }
    }
}

/// Enumerativo que define los errores de las fuentes de aleatoriedad:
/// la fuente de palabras y los nombres de archivo
#[derive(Debug, PartialEq)]
pub enum ErrorFuente {
    FuenteAgotada { intentos: u32 },
    NombresAgotados,
}

impl fmt::Display for ErrorFuente {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FuenteAgotada { intentos } => {
                write!(f, "la fuente no devolvio palabras tras {intentos} intentos")
            }
            Self::NombresAgotados => write!(f, "no se encontro un nombre aleatorio libre"),
        }
    }
}
