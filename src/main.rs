// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : options clap, logs tracing, puis
//   soit un calcul unique (--expression / --pourcent), soit la fenêtre eframe
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::process::ExitCode;

    use clap::Parser;
    use tracing::{error, info};
    use tracing_subscriber::EnvFilter;

    use super::{egui, AppCalc, TITRE_APP};
    use crate::app::etat::{vers_ascii, TEXTE_ERREUR};
    use crate::noyau::{self, ErreurCalcul};

    /// Calculatrice : expression infixe (+ - * / parenthèses) en double précision.
    ///
    /// Sans option, ouvre la fenêtre.
    #[derive(Parser, Debug)]
    #[command(version, about, long_about = None)]
    pub struct Options {
        /// Évalue une expression, affiche le résultat et quitte (× et ÷ acceptés).
        #[arg(short, long, allow_hyphen_values = true, conflicts_with = "pourcent")]
        pub expression: Option<String>,

        /// Applique la touche % à une valeur, affiche le résultat et quitte.
        #[arg(short, long, allow_hyphen_values = true)]
        pub pourcent: Option<String>,
    }

    /// Logs sur stderr, filtre via RUST_LOG (défaut : warn).
    fn installer_logs() {
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Même contrat que l’écran : résultat rendu, ou "Error" (raison dans les logs).
    fn imprimer(resultat: Result<f64, ErreurCalcul>) -> ExitCode {
        match resultat {
            Ok(v) => {
                println!("{}", noyau::format_resultat(v));
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(erreur = %e, "calcul refusé");
                println!("{TEXTE_ERREUR}");
                ExitCode::FAILURE
            }
        }
    }

    fn lancer_fenetre() -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([340.0, 480.0])
                .with_min_inner_size([320.0, 440.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(|_cc| Ok(Box::<AppCalc>::default())),
        )
    }

    pub fn main() -> ExitCode {
        installer_logs();
        let options = Options::parse();

        if let Some(expression) = options.expression {
            return imprimer(noyau::evaluate(&vers_ascii(&expression)));
        }
        if let Some(valeur) = options.pourcent {
            return imprimer(noyau::percent(&valeur));
        }

        info!("ouverture de la fenêtre");
        match lancer_fenetre() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(erreur = %e, "fenêtre");
                ExitCode::FAILURE
            }
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    natif::main()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
