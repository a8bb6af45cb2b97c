//! Este modulo define la fuente externa de palabras aleatorias, y una
//! implementacion que no depende de la red: un diccionario de palabras en
//! ingles embebido en el binario.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::aliases::LoteDePalabras;
use crate::TAM_LOTE_DEFECTO;

const DICCIONARIO: &str = include_str!("diccionario.txt");

/// Fuente de palabras aleatorias. Cada llamada devuelve un lote nuevo, o
/// `None` si no tiene nada para devolver en ese momento
pub trait FuentePalabras {
    fn obtener_palabras(&mut self) -> Option<LoteDePalabras>;
}

/// Cualquier closure que devuelva lotes sirve de fuente
impl<F> FuentePalabras for F
where
    F: FnMut() -> Option<LoteDePalabras>,
{
    fn obtener_palabras(&mut self) -> Option<LoteDePalabras> {
        self()
    }
}

/// Diccionario local de palabras en ingles. Cada lote es una muestra sin
/// repeticion de `tam_lote` palabras del diccionario
pub struct DiccionarioLocal<R = ThreadRng> {
    palabras: Vec<&'static str>,
    tam_lote: usize,
    rng: R,
}

impl DiccionarioLocal {
    /// Crea un diccionario que entrega lotes del tamaño dado
    pub fn new(tam_lote: usize) -> Self {
        Self::con_rng(tam_lote, rand::thread_rng())
    }
}

impl Default for DiccionarioLocal {
    fn default() -> Self {
        Self::new(TAM_LOTE_DEFECTO)
    }
}

impl<R: Rng> DiccionarioLocal<R> {
    /// Crea un diccionario que usa el generador de numeros aleatorios dado
    pub fn con_rng(tam_lote: usize, rng: R) -> Self {
        let palabras = DICCIONARIO
            .lines()
            .map(str::trim)
            .filter(|palabra| !palabra.is_empty())
            .collect();
        Self {
            palabras,
            tam_lote,
            rng,
        }
    }

    /// Cantidad de palabras distintas que conoce el diccionario
    pub fn len(&self) -> usize {
        self.palabras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palabras.is_empty()
    }
}

impl<R: Rng> FuentePalabras for DiccionarioLocal<R> {
    fn obtener_palabras(&mut self) -> Option<LoteDePalabras> {
        let lote: LoteDePalabras = self
            .palabras
            .choose_multiple(&mut self.rng, self.tam_lote)
            .map(|palabra| palabra.to_string())
            .collect();
        if lote.is_empty() {
            return None;
        }
        Some(lote)
    }
}
