pub mod aliases;
pub mod config;
pub mod errores;
pub mod generador;
pub mod palabras;
pub mod salida;

/// Carpeta, relativa al directorio de trabajo, donde se escriben los archivos
pub const DIRECTORIO_SALIDA: &str = "Output";

/// Nombre base usado para los archivos cuando no se indica otro
pub const NOMBRE_BASE_DEFECTO: &str = "testing_file";

/// Extension de todos los archivos generados
pub const EXTENSION: &str = "txt";

/// Cantidad minima de palabras por linea (inclusive)
pub const MIN_PALABRAS_LINEA: usize = 15;

/// Cantidad maxima de palabras por linea (exclusive)
pub const MAX_PALABRAS_LINEA: usize = 30;

/// Cantidad de intentos por defecto para obtener un lote de palabras no vacio
pub const MAX_REINTENTOS_DEFECTO: u32 = 10;

/// Cantidad de palabras que entrega el diccionario local por lote, por defecto
pub const TAM_LOTE_DEFECTO: usize = 10;

/// Longitud de los nombres de archivo aleatorios
pub const LARGO_NOMBRE_ALEATORIO: usize = 10;

/// Arma el nombre de un archivo a partir de su nombre sin extension
pub fn con_extension(nombre: &str) -> String {
    format!("{nombre}.{EXTENSION}")
}
