//! Resumen de una corrida del generador, para mostrarlo por pantalla o
//! emitirlo en formato json

use std::fmt;
use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::errores::Error;

/// Datos de un archivo ya escrito
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchivoGenerado {
    pub ruta: PathBuf,
    pub lineas: usize,
    pub palabras: usize,
    pub palabras_sesgo: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Resumen {
    pub archivos: Vec<ArchivoGenerado>,
    pub lineas: usize,
    pub palabras: usize,
    pub palabras_sesgo: usize,
}

impl Resumen {
    /// Suma un archivo escrito a los totales de la corrida
    pub fn registrar(&mut self, archivo: ArchivoGenerado) {
        self.lineas += archivo.lineas;
        self.palabras += archivo.palabras;
        self.palabras_sesgo += archivo.palabras_sesgo;
        self.archivos.push(archivo);
    }

    /// Fraccion de las palabras escritas que salieron de la lista de sesgo
    pub fn proporcion_sesgo(&self) -> f64 {
        if self.palabras == 0 {
            return 0.0;
        }
        self.palabras_sesgo as f64 / self.palabras as f64
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Texto a mostrar al final de la corrida: json o el resumen coloreado
    pub fn renderizar(&self, json: bool) -> Result<String, Error> {
        if json {
            return Ok(self.to_json()?);
        }
        Ok(self.to_string())
    }
}

impl fmt::Display for Resumen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for archivo in &self.archivos {
            writeln!(
                f,
                "{} ({} lineas)",
                archivo.ruta.display().to_string().green(),
                archivo.lineas
            )?;
        }
        write!(
            f,
            "Se generaron {} archivos con {} lineas y {} palabras",
            self.archivos.len().to_string().blue(),
            self.lineas.to_string().blue(),
            self.palabras.to_string().blue()
        )?;
        if self.palabras_sesgo > 0 {
            write!(
                f,
                ", {} de la lista de palabras",
                self.palabras_sesgo.to_string().blue()
            )?;
        }
        Ok(())
    }
}
