//! Obtencion de lotes de palabras con una cantidad acotada de reintentos

use tracing::{debug, warn};

use super::FuentePalabras;
use crate::aliases::LoteDePalabras;
use crate::errores::ErrorFuente;

/// Pide un lote a la fuente hasta que devuelva uno no vacio. Si tras
/// `max_intentos` pedidos no lo consigue, devuelve `FuenteAgotada`
pub fn obtener_lote<F>(fuente: &mut F, max_intentos: u32) -> Result<LoteDePalabras, ErrorFuente>
where
    F: FuentePalabras + ?Sized,
{
    for intento in 1..=max_intentos {
        match fuente.obtener_palabras() {
            Some(lote) if !lote.is_empty() => {
                debug!(intento, palabras = lote.len(), "lote de palabras obtenido");
                return Ok(lote);
            }
            _ => warn!(intento, max_intentos, "la fuente no devolvio palabras"),
        }
    }
    Err(ErrorFuente::FuenteAgotada {
        intentos: max_intentos,
    })
}
