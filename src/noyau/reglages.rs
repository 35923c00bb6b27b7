//! Réglages du noyau (mode d’angle + garde-fous).
//!
//! Contrats :
//! - une évaluation lit ses réglages une seule fois, au départ
//! - les bornes sont clampées (jamais 0, jamais au-delà du plafond)

use super::fonctions::ModeAngle;

/// Nombre maximal de jetons par défaut (anti-gel / anti-pile).
pub const MAX_JETONS_DEFAUT: usize = 4096;

/// Profondeur maximale de parenthèses par défaut.
pub const MAX_IMBRICATION_DEFAUT: usize = 64;

/// Profondeur maximale de l’arbre par défaut (chaînes de '-', de '!', longues sommes…).
/// Évaluer, afficher et libérer l’arbre est récursif : doit tenir sur un thread de 2 Mio.
pub const MAX_PROFONDEUR_DEFAUT: usize = 512;

/// Plafonds durs : même un réglage explicite ne peut pas les dépasser.
const MAX_JETONS_PLAFOND: usize = 65_536;
const MAX_IMBRICATION_PLAFOND: usize = 512;
const MAX_PROFONDEUR_PLAFOND: usize = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub mode: ModeAngle,
    pub max_jetons: usize,
    pub max_imbrication: usize,
    pub max_profondeur: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            mode: ModeAngle::default(),
            max_jetons: MAX_JETONS_DEFAUT,
            max_imbrication: MAX_IMBRICATION_DEFAUT,
            max_profondeur: MAX_PROFONDEUR_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn avec_mode(mode: ModeAngle) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn set_max_jetons(&mut self, n: usize) {
        self.max_jetons = n.clamp(1, MAX_JETONS_PLAFOND);
    }

    pub fn set_max_imbrication(&mut self, n: usize) {
        self.max_imbrication = n.clamp(1, MAX_IMBRICATION_PLAFOND);
    }

    pub fn set_max_profondeur(&mut self, n: usize) {
        self.max_profondeur = n.clamp(1, MAX_PROFONDEUR_PLAFOND);
    }
}
