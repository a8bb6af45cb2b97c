//! Este modulo define como se nombran los archivos generados: de forma
//! secuencial a partir de un nombre base, o con nombres aleatorios.

use std::collections::HashSet;
use std::path::Path;

use rand::Rng;

use crate::aliases::NumeroArchivo;
use crate::errores::{ErrorArgumentos, ErrorFuente};
use crate::{con_extension, LARGO_NOMBRE_ALEATORIO};

const LETRAS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Cantidad de veces que se sortea un nombre aleatorio antes de rendirse
const MAX_SORTEOS_NOMBRE: usize = 100;

/// Nombre del archivo numero `n` de la corrida, sin extension
pub fn nombre_secuencial(
    base: &str,
    inicial: NumeroArchivo,
    n: u32,
) -> Result<String, ErrorArgumentos> {
    let numero = inicial
        .checked_add(NumeroArchivo::from(n))
        .ok_or(ErrorArgumentos::NumeracionDesbordada)?;
    Ok(format!("{base}{numero}"))
}

/// Nombre de `LARGO_NOMBRE_ALEATORIO` letras ascii, mayusculas o minusculas
pub fn nombre_aleatorio<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..LARGO_NOMBRE_ALEATORIO)
        .map(|_| LETRAS[rng.gen_range(0..LETRAS.len())] as char)
        .collect()
}

/// Sortea nombres aleatorios hasta dar con uno que no se haya usado en esta
/// corrida y que no exista ya en la carpeta de salida
pub fn nombre_aleatorio_libre<R: Rng + ?Sized>(
    rng: &mut R,
    directorio: &Path,
    usados: &mut HashSet<String>,
) -> Result<String, ErrorFuente> {
    for _ in 0..MAX_SORTEOS_NOMBRE {
        let nombre = nombre_aleatorio(rng);
        if usados.contains(&nombre) || directorio.join(con_extension(&nombre)).exists() {
            continue;
        }
        usados.insert(nombre.clone());
        return Ok(nombre);
    }
    Err(ErrorFuente::NombresAgotados)
}
