// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue, Backspace efface (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Mode d’angle visible en permanence (Degrés / Radians)
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)
// - Enter suffit (clavier PC + “Enter” virtuel mobile selon navigateur)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::operations::{
    appliquer_fonction, appliquer_operateur, constantes, convertir_angle,
};
use crate::noyau::{evaluer_detaille, format_resultat, ErreurCalcul, GenreErreur, ModeAngle};

/// Fonctions proposées en boutons (libellé, texte inséré).
const TOUCHES_FONCTIONS: [(&str, &str); 14] = [
    ("sin", "sin("),
    ("cos", "cos("),
    ("tan", "tan("),
    ("asin", "asin("),
    ("acos", "acos("),
    ("atan", "atan("),
    ("log", "log("),
    ("ln", "ln("),
    ("exp", "exp("),
    ("√", "sqrt("),
    ("abs", "abs("),
    ("floor", "floor("),
    ("ceil", "ceil("),
    ("round", "round("),
];

/// Fonctions du panneau « opération directe ».
const FONCTIONS_DIRECTES: [&str; 23] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "log", "ln", "exp", "exp2", "exp10", "sqrt",
    "cbrt", "abs", "neg", "factorial", "floor", "ceil", "round", "sinh", "cosh", "tanh", "gamma",
];

/// Motifs retirés d’un coup par DEL.
const MOTIFS_DEL: [&str; 16] = [
    "asin(", "acos(", "atan(", "floor(", "round(", "sqrt(", "ceil(", "sin(", "cos(", "tan(",
    "log(", "exp(", "abs(", "ln(", "pi", "**",
];

fn etiquette(genre: GenreErreur) -> &'static str {
    match genre {
        GenreErreur::Syntaxe => "Syntaxe",
        GenreErreur::Domaine => "Domaine",
        GenreErreur::Depassement => "Dépassement",
        GenreErreur::DivisionParZero => "Division par zéro",
        GenreErreur::NonSupportee => "Non supportée",
        GenreErreur::Limite => "Limite",
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
                self.ui_direct(ui);
                self.ui_garde_fous(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2*(3+sin(45))^2, 5!, 2pi, log(1000)")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        // Actions + mode + décimales
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            let mut mode = self.calc.mode();
            ui.selectable_value(&mut mode, ModeAngle::Degres, "Degrés");
            ui.selectable_value(&mut mode, ModeAngle::Radians, "Radians");
            if mode != self.calc.mode() {
                self.set_mode(mode);
            }

            ui.separator();

            let mut d = self.digits as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=17)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_digits(d as usize);
            }
        });

        ui.add_space(8.0);

        // Opérateurs + constantes + "="
        let c = constantes();
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", ")", InsertKind::Postfix);

            self.bouton_insert(ui, "+", "+", InsertKind::Op);
            self.bouton_insert(ui, "-", "-", InsertKind::Op);
            self.bouton_insert(ui, "×", "*", InsertKind::Op);
            self.bouton_insert(ui, "÷", "/", InsertKind::Op);
            self.bouton_insert(ui, "^", "^", InsertKind::Op);
            self.bouton_insert(ui, "!", "!", InsertKind::Postfix);

            ui.separator();

            self.bouton_insert(ui, "π", "pi", InsertKind::Word)
                .on_hover_text(format!("π = {}", c.pi));
            self.bouton_insert(ui, "e", "e", InsertKind::Word)
                .on_hover_text(format!("e = {}", c.e));

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
                self.focus_entree = true;
            }
        });

        ui.horizontal_wrapped(|ui| {
            for (label, texte) in TOUCHES_FONCTIONS {
                self.bouton_insert(ui, label, texte, InsertKind::Func);
            }
        });

        ui.add_space(8.0);

        // Pavé numérique
        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            let txt = match self.genre_erreur {
                Some(g) => format!("[{}] {}", etiquette(g), self.erreur),
                None => self.erreur.clone(),
            };
            ui.colored_label(ui.visuals().error_fg_color, txt);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", "9", InsertKind::Digit);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", "6", InsertKind::Digit);
                self.bouton_insert(ui, "÷", "/", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "1", "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", "3", InsertKind::Digit);
                self.bouton_insert(ui, ".", ".", InsertKind::Digit);
                ui.end_row();

                self.bouton_insert(ui, "0", "0", InsertKind::Digit);
                ui.label("");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    /// Backspace “intelligent” : retire d’un coup les motifs utiles ("sin(", "pi", etc.).
    fn backspace_entree(&mut self) {
        let trimmed = self.entree.trim_end().len();
        self.entree.truncate(trimmed);

        let retire = MOTIFS_DEL
            .iter()
            .find(|pat| self.entree.ends_with(*pat))
            .map_or(1, |pat| pat.chars().count());

        for _ in 0..retire {
            self.entree.pop();
        }

        let trimmed = self.entree.trim_end().len();
        self.entree.truncate(trimmed);
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label(format!("Résultat ({}) :", self.calc.mode()));
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Normalisée", "demarche_norm", &self.demarche.normalisee);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(ui, "Arbre", "demarche_arbre", &self.demarche.arbre);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    /// a op b, f(a), conversion : sans passer par l’analyse d’expression.
    fn ui_direct(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Opération directe")
            .default_open(false)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("a :");
                    ui.add(egui::DragValue::new(&mut self.direct.a).speed(0.1));
                    ui.label("b :");
                    ui.add(egui::DragValue::new(&mut self.direct.b).speed(0.1));
                });

                ui.horizontal_wrapped(|ui| {
                    for op in ["+", "-", "×", "÷", "^", "%", "log"] {
                        if ui.add_sized([40.0, 28.0], egui::Button::new(op)).clicked() {
                            let r = appliquer_operateur(self.direct.a, self.direct.b, op);
                            self.direct.sortie = self.sortie_directe(r);
                        }
                    }
                });

                ui.horizontal(|ui| {
                    egui::ComboBox::from_id_salt("fonction_directe")
                        .selected_text(self.direct.fonction.as_str())
                        .show_ui(ui, |ui| {
                            for f in FONCTIONS_DIRECTES {
                                ui.selectable_value(&mut self.direct.fonction, f.to_string(), f);
                            }
                        });
                    if ui.button("f(a)").clicked() {
                        let r = appliquer_fonction(
                            self.direct.a,
                            &self.direct.fonction,
                            self.calc.mode(),
                        );
                        self.direct.sortie = self.sortie_directe(r);
                    }

                    ui.separator();

                    if ui.button("a° → rad").clicked() {
                        let v = convertir_angle(self.direct.a, ModeAngle::Degres, ModeAngle::Radians);
                        self.direct.sortie = format_resultat(v, self.digits);
                    }
                    if ui.button("a rad → °").clicked() {
                        let v = convertir_angle(self.direct.a, ModeAngle::Radians, ModeAngle::Degres);
                        self.direct.sortie = format_resultat(v, self.digits);
                    }
                });

                Self::champ_monospace(ui, "direct_out", &self.direct.sortie, 1);
            });
    }

    fn sortie_directe(&self, r: Result<f64, ErreurCalcul>) -> String {
        match r {
            Ok(v) => format_resultat(v, self.digits),
            Err(e) => format!("[{}] {e}", etiquette(e.genre())),
        }
    }

    fn ui_garde_fous(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Garde-fous")
            .default_open(false)
            .show(ui, |ui| {
                let r = *self.calc.reglages();

                ui.horizontal(|ui| {
                    let mut n = r.max_jetons;
                    ui.label("Jetons max :");
                    if ui.add(egui::DragValue::new(&mut n).speed(16)).changed() {
                        self.set_max_jetons(n);
                    }

                    let mut p = r.max_imbrication;
                    ui.label("Imbrication max :");
                    if ui.add(egui::DragValue::new(&mut p).speed(1)).changed() {
                        self.set_max_imbrication(p);
                    }

                    let mut h = r.max_profondeur;
                    ui.label("Profondeur max :");
                    if ui.add(egui::DragValue::new(&mut h).speed(4)).changed() {
                        self.set_max_profondeur(h);
                    }
                });
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        to_insert: &str,
        kind: InsertKind,
    ) -> egui::Response {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.inserer(to_insert, kind);
            self.focus_entree = true;
        }
        resp
    }

    /// Insère un symbole en gardant l’entrée lisible (espaces autour des opérateurs).
    fn inserer(&mut self, to_insert: &str, kind: InsertKind) {
        match kind {
            InsertKind::Postfix => {
                let trimmed = self.entree.trim_end().len();
                self.entree.truncate(trimmed);
                self.entree.push_str(to_insert);
            }
            InsertKind::Op => {
                let trimmed = self.entree.trim_end().len();
                self.entree.truncate(trimmed);
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto
                self.entree.push_str(to_insert);
            }
            InsertKind::OpenParen | InsertKind::Func | InsertKind::Word => {
                // la multiplication implicite fait le reste ("2 sin(", "3 pi", "3! sin(")
                let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                let colle = last.is_some_and(|c| {
                    c.is_ascii_digit() || c.is_ascii_alphabetic() || c == ')' || c == '!'
                });
                if colle && !self.entree.ends_with(char::is_whitespace) {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
            }
        }
    }

    /// Évalue l’expression via le noyau, puis dépose résultat/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let s = self.entree.trim();
        if s.is_empty() {
            self.set_erreur("Entrée vide", None);
            return;
        }

        match evaluer_detaille(s, self.calc.reglages()) {
            Ok((v, d_noyau)) => {
                let txt = format_resultat(v, self.digits);
                self.set_resultat(txt, d_noyau);
            }
            Err(e) => {
                log::warn!("échec de l’évaluation de {s:?} : {e}");
                let genre = e.genre();
                self.set_erreur(e.to_string(), Some(genre));
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Word,
    Func,
    Op,
    OpenParen,
    /// ')' et '!' : collés à l’opérande
    Postfix,
}
