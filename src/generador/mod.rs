//! Este modulo contiene el generador de archivos de texto. Por cada archivo
//! pide un lote nuevo de palabras a la fuente, y arma cada linea mezclando
//! esas palabras con las de la lista de sesgo, si la hay.

pub mod nombres;
pub mod resumen;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::aliases::LoteDePalabras;
use crate::config::Configuracion;
use crate::errores::{Error, ErrorFuente};
use crate::palabras::{self, FuentePalabras};
use crate::salida::{self, EscritorArchivo};
use crate::{con_extension, MAX_PALABRAS_LINEA, MIN_PALABRAS_LINEA};

pub use resumen::{ArchivoGenerado, Resumen};

/// Una linea ya compuesta, junto con la cantidad de palabras que la forman
/// y cuantas de ellas salieron de la lista de sesgo
#[derive(Debug, Clone, PartialEq)]
pub struct Linea {
    pub texto: String,
    pub palabras: usize,
    pub palabras_sesgo: usize,
}

/// Arma una linea de entre `MIN_PALABRAS_LINEA` y `MAX_PALABRAS_LINEA`
/// (exclusive) palabras separadas por espacios. Cada palabra sale de la lista
/// de sesgo con probabilidad 1/4, si la lista no es vacia, y del lote en
/// caso contrario. El lote no debe ser vacio.
pub fn componer_linea<R: Rng + ?Sized>(
    rng: &mut R,
    lote: &[String],
    sesgo: Option<&[String]>,
) -> Linea {
    let cantidad = rng.gen_range(MIN_PALABRAS_LINEA..MAX_PALABRAS_LINEA);
    let mut palabras: Vec<&str> = Vec::with_capacity(cantidad);
    let mut palabras_sesgo = 0;

    for _ in 0..cantidad {
        let palabra = match sesgo {
            Some(lista) if !lista.is_empty() && rng.gen_ratio(1, 4) => {
                palabras_sesgo += 1;
                lista.choose(rng)
            }
            _ => lote.choose(rng),
        };
        if let Some(palabra) = palabra {
            palabras.push(palabra);
        }
    }

    Linea {
        texto: palabras.join(" "),
        palabras: palabras.len(),
        palabras_sesgo,
    }
}

/// Generador de archivos. Recibe de forma explicita la fuente de palabras y
/// el generador de numeros aleatorios que usa para armar lineas y nombres.
pub struct GeneradorArchivos<F, R = ThreadRng> {
    config: Configuracion,
    fuente: F,
    rng: R,
    nombres_usados: HashSet<String>,
}

impl<F: FuentePalabras> GeneradorArchivos<F> {
    pub fn new(config: Configuracion, fuente: F) -> Result<Self, Error> {
        Self::con_rng(config, fuente, rand::thread_rng())
    }
}

impl<F: FuentePalabras, R: Rng> GeneradorArchivos<F, R> {
    /// Normaliza la configuracion y se asegura de que exista la carpeta de
    /// salida antes de escribir cualquier archivo
    pub fn con_rng(config: Configuracion, fuente: F, rng: R) -> Result<Self, Error> {
        let config = config.normalizar()?;
        salida::preparar_directorio(&config.directorio)?;
        Ok(Self {
            config,
            fuente,
            rng,
            nombres_usados: HashSet::new(),
        })
    }

    pub fn configuracion(&self) -> &Configuracion {
        &self.config
    }

    /// Pide un lote no vacio a la fuente, con la cantidad de reintentos
    /// configurada
    pub fn obtener_lote(&mut self) -> Result<LoteDePalabras, ErrorFuente> {
        palabras::obtener_lote(&mut self.fuente, self.config.max_reintentos)
    }

    pub fn componer_linea(&mut self, lote: &[String]) -> Linea {
        componer_linea(&mut self.rng, lote, self.config.lista_sesgo.as_deref())
    }

    /// Escribe un archivo en `ruta` con la cantidad de lineas configurada,
    /// usando un lote de palabras nuevo. Pisa el archivo si ya existia
    pub fn generar_archivo(&mut self, ruta: &Path) -> Result<ArchivoGenerado, Error> {
        let lote = self.obtener_lote()?;
        let mut escritor = EscritorArchivo::crear(ruta)?;
        let mut palabras = 0;
        let mut palabras_sesgo = 0;

        for _ in 0..self.config.cantidad_lineas {
            let linea = self.componer_linea(&lote);
            escritor.escribir_linea(&linea.texto)?;
            palabras += linea.palabras;
            palabras_sesgo += linea.palabras_sesgo;
        }

        let (ruta, lineas) = escritor.finalizar()?;
        debug!(ruta = %ruta.display(), lineas, palabras, "archivo escrito");
        Ok(ArchivoGenerado {
            ruta,
            lineas,
            palabras,
            palabras_sesgo,
        })
    }

    /// Ruta del archivo numero `n` de la corrida, segun la politica de
    /// nombres configurada
    pub fn ruta_archivo(&mut self, n: u32) -> Result<PathBuf, Error> {
        let nombre = if self.config.nombre_aleatorio {
            nombres::nombre_aleatorio_libre(
                &mut self.rng,
                &self.config.directorio,
                &mut self.nombres_usados,
            )?
        } else {
            nombres::nombre_secuencial(&self.config.nombre_base, self.config.numero_inicial, n)?
        };
        Ok(self.config.directorio.join(con_extension(&nombre)))
    }

    /// Genera todos los archivos configurados, uno detras de otro. Ante el
    /// primer error se corta la corrida
    pub fn ejecutar(&mut self) -> Result<Resumen, Error> {
        let mut resumen = Resumen::default();
        for n in 0..self.config.cantidad_archivos {
            let ruta = self.ruta_archivo(n)?;
            let archivo = self.generar_archivo(&ruta)?;
            resumen.registrar(archivo);
        }
        info!(
            archivos = resumen.archivos.len(),
            lineas = resumen.lineas,
            directorio = %self.config.directorio.display(),
            "generacion finalizada"
        );
        Ok(resumen)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errores::ErrorSistemaArchivos;
    use crate::errores::ErrorArgumentos;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;
    use tempfile::TempDir;

    fn palabras(lista: &[&str]) -> Vec<String> {
        lista.iter().map(|p| p.to_string()).collect()
    }

    fn fuente_fija() -> impl FnMut() -> Option<LoteDePalabras> {
        || Some(palabras(&["alfa", "beta", "gamma", "delta"]))
    }

    #[test]
    fn lineas_de_quince_a_veintinueve_palabras() {
        let mut rng = StdRng::seed_from_u64(11);
        let lote = palabras(&["uno", "dos", "tres"]);
        let mut largos = HashSet::new();

        for _ in 0..500 {
            let linea = componer_linea(&mut rng, &lote, None);
            let cantidad = linea.texto.split(' ').count();
            assert!((15..30).contains(&cantidad));
            assert_eq!(cantidad, linea.palabras);
            assert!(!linea.texto.ends_with(' '));
            largos.insert(cantidad);
        }
        assert!(largos.contains(&15));
        assert!(largos.contains(&29));
    }

    #[test]
    fn sin_lista_de_sesgo_no_aparecen_sus_palabras() {
        let mut rng = StdRng::seed_from_u64(5);
        let lote = palabras(&["lote"]);
        let vacia: Vec<String> = Vec::new();

        for _ in 0..100 {
            let linea = componer_linea(&mut rng, &lote, None);
            assert_eq!(linea.palabras_sesgo, 0);
            assert!(linea.texto.split(' ').all(|p| p == "lote"));

            let linea = componer_linea(&mut rng, &lote, Some(vacia.as_slice()));
            assert_eq!(linea.palabras_sesgo, 0);
        }
    }

    #[test]
    fn la_lista_de_sesgo_aparece_una_de_cada_cuatro() {
        let mut rng = StdRng::seed_from_u64(2024);
        let lote = palabras(&["lote"]);
        let sesgo = palabras(&["sesgo"]);
        let mut total = 0;
        let mut del_sesgo = 0;

        for _ in 0..1000 {
            let linea = componer_linea(&mut rng, &lote, Some(sesgo.as_slice()));
            total += linea.palabras;
            del_sesgo += linea.texto.split(' ').filter(|p| *p == "sesgo").count();
            assert_eq!(
                linea.palabras_sesgo,
                linea.texto.split(' ').filter(|p| *p == "sesgo").count()
            );
        }

        let proporcion = del_sesgo as f64 / total as f64;
        assert!((0.23..0.27).contains(&proporcion), "proporcion {proporcion}");
    }

    #[test]
    fn archivos_secuenciales() {
        let temp_dir = TempDir::new().unwrap();
        let directorio = temp_dir.path().join("Output");
        let config = Configuracion {
            numero_inicial: 5,
            nombre_base: "doc".to_string(),
            directorio: directorio.clone(),
            ..Configuracion::new(2, 3)
        };

        let mut generador =
            GeneradorArchivos::con_rng(config, fuente_fija(), StdRng::seed_from_u64(1)).unwrap();
        let resumen = generador.ejecutar().unwrap();

        let rutas: Vec<_> = resumen.archivos.iter().map(|a| a.ruta.clone()).collect();
        assert_eq!(
            rutas,
            vec![directorio.join("doc5.txt"), directorio.join("doc6.txt")]
        );
        for ruta in &rutas {
            let contenido = fs::read_to_string(ruta).unwrap();
            assert!(contenido.ends_with('\n'));
            assert_eq!(contenido.lines().count(), 3);
            for linea in contenido.lines() {
                assert!((15..30).contains(&linea.split(' ').count()));
            }
        }
        assert_eq!(fs::read_dir(&directorio).unwrap().count(), 2);
        assert_eq!(resumen.lineas, 6);
    }

    #[test]
    fn archivos_con_nombre_aleatorio() {
        let temp_dir = TempDir::new().unwrap();
        let directorio = temp_dir.path().join("Output");
        let config = Configuracion {
            nombre_aleatorio: true,
            directorio: directorio.clone(),
            ..Configuracion::new(4, 1)
        };

        let mut generador =
            GeneradorArchivos::con_rng(config, fuente_fija(), StdRng::seed_from_u64(9)).unwrap();
        generador.ejecutar().unwrap();

        let nombres: Vec<String> = fs::read_dir(&directorio)
            .unwrap()
            .map(|entrada| entrada.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(nombres.len(), 4);
        for nombre in nombres {
            let (base, extension) = nombre.split_once('.').unwrap();
            assert_eq!(extension, "txt");
            assert_eq!(base.len(), 10);
            assert!(base.chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn pide_un_lote_por_archivo() {
        let temp_dir = TempDir::new().unwrap();
        let directorio = temp_dir.path().join("Output");
        let mut pedidos = 0;
        let fuente = || -> Option<LoteDePalabras> {
            pedidos += 1;
            Some(vec![format!("lote{pedidos}")])
        };
        let config = Configuracion {
            directorio: directorio.clone(),
            ..Configuracion::new(3, 2)
        };

        let mut generador =
            GeneradorArchivos::con_rng(config, fuente, StdRng::seed_from_u64(3)).unwrap();
        generador.ejecutar().unwrap();
        drop(generador);

        assert_eq!(pedidos, 3);
        let contenido = fs::read_to_string(directorio.join("testing_file1.txt")).unwrap();
        assert!(contenido.split_whitespace().all(|p| p == "lote2"));
    }

    #[test]
    fn fuente_agotada_corta_la_corrida() {
        let temp_dir = TempDir::new().unwrap();
        let directorio = temp_dir.path().join("Output");
        let config = Configuracion {
            directorio: directorio.clone(),
            max_reintentos: 4,
            ..Configuracion::new(2, 2)
        };

        let sin_palabras = || -> Option<LoteDePalabras> { None };
        let mut generador =
            GeneradorArchivos::con_rng(config, sin_palabras, StdRng::seed_from_u64(3)).unwrap();
        let resultado = generador.ejecutar();

        assert!(matches!(
            resultado,
            Err(Error::ErrorDeFuente(ErrorFuente::FuenteAgotada { intentos: 4 }))
        ));
        assert_eq!(fs::read_dir(&directorio).unwrap().count(), 0);
    }

    #[test]
    fn numeracion_desbordada_al_pedir_una_ruta() {
        let temp_dir = TempDir::new().unwrap();
        let config = Configuracion {
            numero_inicial: i64::MAX,
            directorio: temp_dir.path().join("Output"),
            ..Configuracion::new(1, 1)
        };

        let mut generador =
            GeneradorArchivos::con_rng(config, fuente_fija(), StdRng::seed_from_u64(0)).unwrap();
        assert!(generador.ruta_archivo(0).is_ok());
        assert!(matches!(
            generador.ruta_archivo(1),
            Err(Error::ErrorDeArgumentos(
                ErrorArgumentos::NumeracionDesbordada
            ))
        ));
    }

    #[test]
    fn carpeta_de_salida_invalida() {
        let temp_dir = TempDir::new().unwrap();
        let archivo = temp_dir.path().join("ocupado");
        fs::write(&archivo, "").unwrap();
        let config = Configuracion {
            directorio: archivo,
            ..Configuracion::new(1, 1)
        };

        let resultado = GeneradorArchivos::con_rng(config, fuente_fija(), StdRng::seed_from_u64(0));
        assert!(matches!(
            resultado,
            Err(Error::ErrorDeSistemaArchivos(
                ErrorSistemaArchivos::RutaNoEsDirectorio
            ))
        ));
    }
}
