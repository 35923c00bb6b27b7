// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// Nombre signé : le '-' unaire collé à un littéral y est replié.
    Num(f64),

    // Fonctions (sin/cos/...) ou noms inconnus
    // NOTE: le parse (RPN->Expr) décidera si c’est une fonction connue.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^ ou **
    Bang,  // ! (factorielle postfixée)

    // Moins unaire devant un groupe / une fonction (produit par to_rpn seulement)
    Neg,

    LPar,
    RPar,
}

impl Tok {
    /// Le jeton termine-t-il une valeur ? (sert à détecter le moins unaire)
    fn ferme_une_valeur(&self) -> bool {
        matches!(self, Tok::Num(_) | Tok::RPar | Tok::Bang)
    }
}

/// Tokenize une chaîne (normalisée) en jetons.
/// Supporte:
/// - nombres décimaux : chiffres ('.' chiffres)?
/// - moins unaire collé à un nombre -> Num négatif ("-5", "3*-2", "2^-1")
/// - opérateurs + - * / ^ ** !
/// - parenthèses ( )
/// - identifiants alphabétiques (normalisés en minuscules)
/// - √ (équivaut à ident("sqrt"))
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Moins : unaire + nombre juste derrière => littéral signé
        if c == '-' {
            let unaire = !out.last().is_some_and(Tok::ferme_une_valeur);
            let suivi_chiffre = chars
                .get(i + 1)
                .is_some_and(|n| n.is_ascii_digit() || *n == '.');
            if unaire && suivi_chiffre {
                let (v, fin) = lire_nombre(&chars, i + 1)?;
                out.push(Tok::Num(-v));
                i = fin;
            } else {
                out.push(Tok::Minus);
                i += 1;
            }
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '*' => {
                // "**" == "^"
                if chars.get(i + 1) == Some(&'*') {
                    out.push(Tok::Caret);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            '!' => {
                out.push(Tok::Bang);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Racine carrée unicode : √  => ident("sqrt")
        if c == '√' {
            out.push(Tok::Ident("sqrt".to_string()));
            i += 1;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z]+ (normalisés en minuscules)
        if c.is_ascii_alphabetic() {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word.to_lowercase()));
            continue;
        }

        // Autre lettre (non ASCII) : identifiant d’un seul caractère, rejeté plus loin
        if c.is_alphabetic() {
            out.push(Tok::Ident(c.to_string()));
            i += 1;
            continue;
        }

        // Nombre décimal
        if c.is_ascii_digit() || c == '.' {
            let (v, fin) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(v));
            i = fin;
            continue;
        }

        if c.is_ascii_punctuation() {
            return Err(ErreurCalcul::non_supportee(format!(
                "opérateur inconnu : '{c}'"
            )));
        }
        return Err(ErreurCalcul::syntaxe(format!("caractère inattendu : '{c}'")));
    }

    Ok(out)
}

/// Lit un nombre à partir de `start` : la suite maximale de chiffres et de '.'.
/// Forme acceptée : chiffres ('.' chiffres)? ; sinon erreur qui nomme le jeton.
fn lire_nombre(chars: &[char], start: usize) -> Result<(f64, usize), ErreurCalcul> {
    let mut i = start;
    while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
        i += 1;
    }
    let txt: String = chars[start..i].iter().collect();

    let mut parts = txt.split('.');
    let entier = parts.next().unwrap_or("");
    let frac = parts.next();
    let forme_ok = !entier.is_empty()
        && parts.next().is_none()
        && frac.is_none_or(|f| !f.is_empty());

    if !forme_ok {
        return Err(ErreurCalcul::syntaxe(format!("nombre invalide : {txt}")));
    }

    let v = txt
        .parse::<f64>()
        .map_err(|_| ErreurCalcul::syntaxe(format!("nombre invalide : {txt}")))?;
    // trop de chiffres : f64 donnerait ∞
    if !v.is_finite() {
        return Err(ErreurCalcul::syntaxe(format!("nombre invalide : {txt}")));
    }
    Ok((v, i))
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Bang => "!".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
