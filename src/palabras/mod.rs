//! Este modulo define de donde salen las palabras aleatorias con las que
//! se arman los archivos, y como se piden los lotes a esa fuente

pub mod fuente;
pub mod lote;

pub use fuente::{DiccionarioLocal, FuentePalabras};
pub use lote::obtener_lote;
