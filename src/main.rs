// src/main.rs
//
// Calculatrice scientifique — point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions, journal env_logger (RUST_LOG)
//   `calculatrice_sci "2*(3+sin(45))^2" ...` : évalue sans ouvrir de fenêtre
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>, journal console
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d’entrée seulement (natif + web)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice scientifique";

/// Variable d’environnement lue au démarrage natif.
#[cfg(not(target_arch = "wasm32"))]
const VAR_MODE: &str = "CALCULATRICE_MODE";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::builder().init();
    log::info!("démarrage de {TITRE_APP}");

    // Mode d’angle de départ : CALCULATRICE_MODE=degree|radian (défaut : degrés)
    let mut app = AppCalc::default();
    if let Ok(txt) = std::env::var(VAR_MODE) {
        match txt.parse::<noyau::ModeAngle>() {
            Ok(mode) => app.set_mode(mode),
            Err(e) => log::warn!("{VAR_MODE} ignorée : {e}"),
        }
    }

    // Expressions passées en arguments : évaluées puis affichées, sans fenêtre.
    let expressions: Vec<String> = std::env::args().skip(1).collect();
    if !expressions.is_empty() {
        let ok = evaluer_en_ligne(&app, &expressions);
        std::process::exit(if ok { 0 } else { 1 });
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([560.0, 780.0])
            .with_min_inner_size([420.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}

/// Mode ligne de commande : une ligne par expression, `false` si l’une échoue.
#[cfg(not(target_arch = "wasm32"))]
fn evaluer_en_ligne(app: &AppCalc, expressions: &[String]) -> bool {
    let calc = app.calc;
    let mut ok = true;

    for expr in expressions {
        match calc.evaluer(expr) {
            Ok(v) => println!("{expr} = {}", noyau::format_resultat(v, app.digits)),
            Err(e) => {
                log::warn!("échec de l’évaluation de {expr:?} ({}) : {e}", calc.mode());
                eprintln!("{expr} : {e}");
                ok = false;
            }
        }
    }

    ok
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
    // On laisse main() vide pour rester clair.
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Journal + paniques vers la console
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        wasm_logger::init(wasm_logger::Config::new(log::Level::Warn));
        console_error_panic_hook::set_once();

        // 1) window/document
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        // 2) element by id
        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        // 3) cast -> HtmlCanvasElement
        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        // 4) run web
        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
