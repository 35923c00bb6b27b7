// src/noyau/normalise.rs
//
// Normalisation textuelle (ne peut pas échouer)
// ---------------------------------------------
// Étapes, dans l’ordre :
// 1) suppression des espaces
// 2) glyphes alternatifs : × -> *, ÷ -> /, − -> -
// 3) racine : "√(x)" -> "sqrt(x)", "√4" -> "sqrt(4)", "√π" -> "sqrt(π)"
// 4) multiplication implicite : "2x", "x2", ")(", "2(", ")2", "3!x" (+ constantes vues comme opérandes)
// 5) constantes autonomes : pi / π / e -> littéral décimal
//
// Les mots sont mis en minuscules ("SIN(PI)" == "sin(pi)").
// Point fixe : normalise(normalise(s)) == normalise(s).

use std::f64::consts::{E, PI};

/// Morceau de l’entrée après les étapes 1-2.
#[derive(Clone, Debug, PartialEq)]
enum Morceau {
    /// chiffre ou '.'
    Chiffre(char),
    /// suite de lettres ASCII, ou un symbole alphabétique isolé (π)
    Mot(String),
    Autre(char),
    /// '√', remplacé par "sqrt" avant la multiplication implicite
    Racine,
}

impl Morceau {
    fn est_constante(&self) -> bool {
        matches!(self, Morceau::Mot(m) if est_nom_constante(m))
    }
}

fn est_nom_constante(m: &str) -> bool {
    matches!(m, "pi" | "π" | "e")
}

fn valeur_constante(m: &str) -> Option<f64> {
    match m {
        "pi" | "π" => Some(PI),
        "e" => Some(E),
        _ => None,
    }
}

fn glyphe_ascii(c: char) -> char {
    match c {
        '×' => '*',
        '÷' => '/',
        '−' => '-',
        _ => c,
    }
}

/// Normalise une expression brute.
pub fn normalise(s: &str) -> String {
    let morceaux = enveloppe_racines(decoupe(s));

    let mut out = String::with_capacity(s.len() + 8);
    let mut prec: Option<&Morceau> = None;

    for m in &morceaux {
        if let Some(p) = prec {
            if multiplication_implicite(p, m) {
                out.push('*');
            }
        }

        match m {
            Morceau::Chiffre(c) | Morceau::Autre(c) => out.push(*c),
            Morceau::Mot(mot) => match valeur_constante(mot) {
                Some(v) => out.push_str(&format!("{v}")),
                None => out.push_str(mot),
            },
            Morceau::Racine => out.push_str("sqrt"),
        }

        prec = Some(m);
    }

    log::trace!("normalise: {s:?} -> {out:?}");
    out
}

/// Étapes 1-2 + découpage en morceaux (mots en minuscules).
fn decoupe(s: &str) -> Vec<Morceau> {
    let mut out = Vec::new();
    let mut mot = String::new();

    for c in s.chars().filter(|c| !c.is_whitespace()).map(glyphe_ascii) {
        if c.is_ascii_alphabetic() {
            mot.push(c.to_ascii_lowercase());
            continue;
        }

        if !mot.is_empty() {
            out.push(Morceau::Mot(std::mem::take(&mut mot)));
        }

        if c.is_ascii_digit() || c == '.' {
            out.push(Morceau::Chiffre(c));
        } else if c == '√' {
            out.push(Morceau::Racine);
        } else if c.is_alphabetic() {
            // π (et autres lettres non ASCII) : toujours un mot isolé, casse conservée
            out.push(Morceau::Mot(c.to_string()));
        } else {
            out.push(Morceau::Autre(c));
        }
    }

    if !mot.is_empty() {
        out.push(Morceau::Mot(mot));
    }

    out
}

/// "√" -> "sqrt". Un opérande nu (chiffres, constante) est parenthésé : "√4" -> "sqrt(4)".
/// En chaîne ("√√4", "√√(x)"), chaque racine externe enveloppe la suivante.
fn enveloppe_racines(morceaux: Vec<Morceau>) -> Vec<Morceau> {
    use Morceau::*;

    if !morceaux.contains(&Racine) {
        return morceaux;
    }

    let sqrt = || Mot("sqrt".to_string());
    let mut out = Vec::with_capacity(morceaux.len() + 8);
    // (profondeur du groupe, nombre de ')' à ajouter à sa fermeture)
    let mut fermetures: Vec<(usize, usize)> = Vec::new();
    let mut profondeur = 0usize;
    let mut i = 0;

    while i < morceaux.len() {
        if morceaux[i] == Racine {
            let n = morceaux[i..].iter().take_while(|m| **m == Racine).count();
            i += n;

            let fin = match morceaux.get(i) {
                Some(Chiffre(_)) => {
                    i + morceaux[i..]
                        .iter()
                        .take_while(|m| matches!(m, Chiffre(_)))
                        .count()
                }
                Some(m) if m.est_constante() => i + 1,
                _ => i,
            };

            if fin > i {
                for _ in 0..n {
                    out.push(sqrt());
                    out.push(Autre('('));
                }
                out.extend_from_slice(&morceaux[i..fin]);
                for _ in 0..n {
                    out.push(Autre(')'));
                }
                i = fin;
            } else {
                // "√(…)" : la dernière racine prend le groupe, les autres se ferment avec lui
                for _ in 1..n {
                    out.push(sqrt());
                    out.push(Autre('('));
                }
                out.push(sqrt());
                if n > 1 {
                    fermetures.push((profondeur, n - 1));
                }
            }
            continue;
        }

        let m = &morceaux[i];
        out.push(m.clone());
        i += 1;

        match m {
            Autre('(') => profondeur += 1,
            Autre(')') => {
                profondeur = profondeur.saturating_sub(1);
                if let Some(&(p, k)) = fermetures.last() {
                    if p == profondeur {
                        fermetures.pop();
                        for _ in 0..k {
                            out.push(Autre(')'));
                        }
                    }
                }
            }
            _ => {}
        }
    }

    out
}

/// Faut-il insérer '*' entre `a` et `b` ?
fn multiplication_implicite(a: &Morceau, b: &Morceau) -> bool {
    use Morceau::*;

    match (a, b) {
        // chiffre -> lettre / lettre -> chiffre
        (Chiffre(_), Mot(_)) | (Mot(_), Chiffre(_)) => true,

        // chiffre -> '(' ; ')' -> chiffre ; ')' -> '('
        (Chiffre(_), Autre('(')) | (Autre(')'), Chiffre(_)) | (Autre(')'), Autre('(')) => true,

        // ')' -> mot : "(2)sin(30)", "(1+1)pi"
        (Autre(')'), Mot(_)) => true,

        // '!' -> opérande : "3!2", "3!sin(30)", "3!(2)"
        (Autre('!'), Mot(_) | Chiffre(_) | Autre('(')) => true,

        // constante -> '(' : "pi(2)"
        (Mot(_), Autre('(')) => a.est_constante(),

        // mot contre mot (seulement via π isolé) : "πe", "xπ"
        (Mot(_), Mot(_)) => a.est_constante() || b.est_constante(),

        _ => false,
    }
}
