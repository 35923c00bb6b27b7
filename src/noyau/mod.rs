//! Noyau scientifique (f64)
//!
//! Organisation interne :
//! - erreur.rs     : ErreurCalcul + genres (syntaxe, domaine, dépassement…)
//! - fonctions.rs  : bibliothèque numérique pure (trig, log, exp, factorielle…)
//! - normalise.rs  : espaces, glyphes, multiplication implicite, constantes
//! - jetons.rs     : tokenisation (moins unaire replié dans les littéraux)
//! - appels.rs     : table nom -> fonction, appliquée avec le mode d’angle
//! - rpn.rs        : shunting-yard + construction Expr
//! - expr.rs       : AST + évaluation ascendante
//! - format.rs     : affichage du résultat et de l’arbre
//! - reglages.rs   : mode d’angle + garde-fous
//! - operations.rs : opérations unitaires (a op b, f(x), constantes, conversion)
//! - eval.rs       : pipeline complet + façade Calculatrice

pub mod appels;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod operations;
pub mod reglages;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurCalcul, GenreErreur};
pub use eval::{evaluer, evaluer_detaille, Calculatrice, DemarcheNoyau};
pub use fonctions::ModeAngle;
pub use format::format_resultat;
pub use reglages::Reglages;
