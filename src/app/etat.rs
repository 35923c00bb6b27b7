//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, digits, mode, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing) : l’état ne fait que mémoriser.
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur l’affichage (digits) et sur les garde-fous du noyau.

use crate::noyau::{Calculatrice, DemarcheNoyau, GenreErreur, ModeAngle, Reglages};

/// Décimales affichées par défaut.
const DIGITS_DEFAUT: usize = 10;

/// Au-delà, un f64 n’a plus rien à dire.
const DIGITS_MAX: usize = 17;

/// Panneau « opération directe » : a op b, f(a), conversion d’angle.
#[derive(Clone, Debug)]
pub struct Direct {
    pub a: f64,
    pub b: f64,
    pub fonction: String,
    pub sortie: String,
}

impl Default for Direct {
    fn default() -> Self {
        Self {
            a: 0.0,
            b: 0.0,
            fonction: "sin".to_string(),
            sortie: String::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,                  // valeur formatée
    pub erreur: String,                    // message d’erreur (si parsing/éval échoue)
    pub genre_erreur: Option<GenreErreur>, // pour l’étiquette (Domaine, Syntaxe…)

    // --- démarche (panneau d’explication) ---
    pub demarche: DemarcheNoyau,

    // --- paramètres ---
    pub digits: usize,
    pub calc: Calculatrice, // mode d’angle + garde-fous

    pub direct: Direct,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            genre_erreur: None,
            demarche: DemarcheNoyau::default(),
            digits: DIGITS_DEFAUT,
            calc: Calculatrice::new(Reglages::default()),
            direct: Direct::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + digits + réglages par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
        self.calc = Calculatrice::default();
        self.direct = Direct::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    fn clear_demarche(&mut self) {
        self.demarche = DemarcheNoyau::default();
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.genre_erreur = None;
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// La démarche, elle, n’a plus de sens.
    pub fn set_erreur(&mut self, msg: impl Into<String>, genre: Option<GenreErreur>) {
        self.erreur = msg.into();
        self.genre_erreur = genre;
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: DemarcheNoyau) {
        self.erreur.clear();
        self.genre_erreur = None;
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.clamp(0, DIGITS_MAX);
        self.focus_entree = true;
    }

    /// Changement de mode : vaut pour les évaluations suivantes seulement.
    pub fn set_mode(&mut self, mode: ModeAngle) {
        self.calc.set_mode(mode);
        self.focus_entree = true;
    }

    pub fn set_max_jetons(&mut self, n: usize) {
        let mut r = *self.calc.reglages();
        r.set_max_jetons(n);
        self.calc = Calculatrice::new(r);
    }

    pub fn set_max_imbrication(&mut self, n: usize) {
        let mut r = *self.calc.reglages();
        r.set_max_imbrication(n);
        self.calc = Calculatrice::new(r);
    }

    pub fn set_max_profondeur(&mut self, n: usize) {
        let mut r = *self.calc.reglages();
        r.set_max_profondeur(n);
        self.calc = Calculatrice::new(r);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erreur_garde_le_dernier_resultat() {
        let mut app = AppCalc::default();
        app.set_resultat("42", DemarcheNoyau {
            rpn: "6 7 *".to_string(),
            ..DemarcheNoyau::default()
        });
        app.set_erreur("division par zéro", Some(GenreErreur::DivisionParZero));

        assert_eq!(app.resultat, "42");
        assert_eq!(app.genre_erreur, Some(GenreErreur::DivisionParZero));
        assert!(app.demarche.rpn.is_empty());
    }

    #[test]
    fn reset_total_remet_les_reglages() {
        let mut app = AppCalc::default();
        app.set_mode(ModeAngle::Radians);
        app.set_digits(99);
        app.set_max_jetons(10);
        app.set_max_profondeur(3);
        assert_eq!(app.digits, DIGITS_MAX);
        assert_eq!(app.calc.reglages().max_jetons, 10);
        assert_eq!(app.calc.reglages().max_profondeur, 3);

        app.reset_total();
        assert_eq!(app.calc.mode(), ModeAngle::Degres);
        assert_eq!(app.digits, DIGITS_DEFAUT);
        assert_eq!(*app.calc.reglages(), Reglages::default());
    }
}
