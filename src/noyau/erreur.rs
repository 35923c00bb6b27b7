// src/noyau/erreur.rs
//
// Erreurs du noyau (typées, jamais de panique sur entrée utilisateur).
// - une variante par genre d’échec
// - DansFonction : annotation (nom de fonction) autour d’une erreur sous-jacente

use thiserror::Error;

/// Genre d’une erreur, indépendant de l’annotation éventuelle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenreErreur {
    Syntaxe,
    Domaine,
    Depassement,
    DivisionParZero,
    NonSupportee,
    Limite,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    /// Expression mal formée : vide, parenthèses, nombre illisible…
    #[error("erreur de syntaxe : {0}")]
    Syntaxe(String),

    /// Entrée hors du domaine mathématique d’une fonction.
    #[error("erreur de domaine : {0}")]
    Domaine(String),

    /// Résultat défini mais non représentable (infini en f64).
    #[error("dépassement : {0}")]
    Depassement(String),

    #[error("division par zéro")]
    DivisionParZero,

    /// Opérateur ou fonction inconnus.
    #[error("opération non supportée : {0}")]
    NonSupportee(String),

    /// Garde-fou (taille / imbrication) atteint avant évaluation.
    #[error("limite atteinte : {0}")]
    Limite(String),

    #[error("erreur dans {fonction} : {source}")]
    DansFonction {
        fonction: String,
        source: Box<ErreurCalcul>,
    },
}

impl ErreurCalcul {
    pub fn syntaxe(msg: impl Into<String>) -> Self {
        Self::Syntaxe(msg.into())
    }

    pub fn domaine(msg: impl Into<String>) -> Self {
        Self::Domaine(msg.into())
    }

    pub fn depassement(msg: impl Into<String>) -> Self {
        Self::Depassement(msg.into())
    }

    pub fn non_supportee(msg: impl Into<String>) -> Self {
        Self::NonSupportee(msg.into())
    }

    /// Annote l’erreur avec le nom de la fonction où elle est apparue.
    pub fn dans_fonction(self, fonction: &str) -> Self {
        Self::DansFonction {
            fonction: fonction.to_string(),
            source: Box::new(self),
        }
    }

    /// Genre réel, en traversant les annotations.
    pub fn genre(&self) -> GenreErreur {
        match self {
            Self::Syntaxe(_) => GenreErreur::Syntaxe,
            Self::Domaine(_) => GenreErreur::Domaine,
            Self::Depassement(_) => GenreErreur::Depassement,
            Self::DivisionParZero => GenreErreur::DivisionParZero,
            Self::NonSupportee(_) => GenreErreur::NonSupportee,
            Self::Limite(_) => GenreErreur::Limite,
            Self::DansFonction { source, .. } => source.genre(),
        }
    }
}
