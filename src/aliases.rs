//! Este modulo define aliases a los distintos tipos de datos
//! para hacer sencillo el pase de uno al otro y dar mayor
//! claridad al codigo

pub type Palabra = String;
pub type LoteDePalabras = Vec<Palabra>;
pub type ListaSesgo = Vec<Palabra>;
pub type NumeroArchivo = i64;
pub type CantidadArchivos = u32;
pub type CantidadLineas = u32;
