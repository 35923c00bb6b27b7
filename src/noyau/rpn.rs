// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name):
//    - si name ∈ table des fonctions => fonction unaire, DOIT être suivie de '('
//    - sinon => opération non supportée
// - Moins unaire:
//    - collé à un nombre : déjà replié en Num négatif par tokenize()
//    - devant '(' ou une fonction : Tok::Neg (préfixe, plus fort que ^)
// - '!' postfixé : sort directement (s’applique à la valeur qui vient d’être produite)
// - ^ / ** : gauche à droite (2^3^2 == (2^3)^2)
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs “collés” à leur argument
//   et sont sorties après la parenthèse fermante.

use super::appels::Fonction;
use super::erreur::ErreurCalcul;
use super::expr::Expr;
use super::jetons::{format_tokens, Tok};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Caret => 3,
        Tok::Neg => 4,
        _ => 0,
    }
}

fn symbole(t: &Tok) -> String {
    format_tokens(std::slice::from_ref(t))
}

/// Identificateurs reconnus comme fonctions (unaire).
fn est_fonction(t: &Tok) -> bool {
    matches!(t, Tok::Ident(name) if Fonction::depuis_nom(name).is_some())
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Num(30), Slash, Num(2), RPar]
///   rpn:    [Num(30), Num(2), Slash, Ident("sin")]
///
/// `max_imbrication` borne la profondeur des parenthèses (garde-fou pile).
pub fn to_rpn(tokens: &[Tok], max_imbrication: usize) -> Result<Vec<Tok>, ErreurCalcul> {
    if tokens.is_empty() {
        return Err(ErreurCalcul::syntaxe("expression vide"));
    }

    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et les opérandes / opérateurs manquants.
    let mut prev_was_value = false;
    let mut profondeur: usize = 0;

    for (i, tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Num(v) => {
                if prev_was_value {
                    return Err(ErreurCalcul::syntaxe(format!(
                        "opérateur manquant avant {v}"
                    )));
                }
                out.push(tok.clone());
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if !est_fonction(tok) {
                    let msg = if matches!(tokens.get(i + 1), Some(Tok::LPar)) {
                        format!("fonction inconnue : {name}")
                    } else {
                        format!("identifiant inconnu : {name}")
                    };
                    return Err(ErreurCalcul::non_supportee(msg));
                }
                if prev_was_value {
                    return Err(ErreurCalcul::syntaxe(format!(
                        "opérateur manquant avant {name}"
                    )));
                }
                if !matches!(tokens.get(i + 1), Some(Tok::LPar)) {
                    return Err(ErreurCalcul::syntaxe(format!(
                        "parenthèse attendue après {name}"
                    )));
                }
                // fonction : on la garde sur la pile (elle sortira après son argument)
                ops.push(tok.clone());
                prev_was_value = false;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurCalcul::syntaxe("opérateur manquant avant '('"));
                }
                profondeur += 1;
                if profondeur > max_imbrication {
                    return Err(ErreurCalcul::Limite(format!(
                        "plus de {max_imbrication} parenthèses imbriquées"
                    )));
                }
                ops.push(Tok::LPar);
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurCalcul::syntaxe("opérande manquant avant ')'"));
                }

                // dépile jusqu’à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(ErreurCalcul::syntaxe(
                        "parenthèses mal appariées : ')' sans '('",
                    ));
                }
                profondeur -= 1;

                // si une fonction est au sommet, on la sort aussi
                if ops.last().is_some_and(est_fonction) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                prev_was_value = true;
            }

            Tok::Bang => {
                if !prev_was_value {
                    return Err(ErreurCalcul::syntaxe("'!' sans opérande"));
                }
                // postfixé, priorité maximale : directement en sortie
                out.push(Tok::Bang);
            }

            Tok::Minus | Tok::Neg if !prev_was_value => {
                // moins unaire (préfixe) : rien à dépiler
                ops.push(Tok::Neg);
            }

            Tok::Neg => {
                return Err(ErreurCalcul::syntaxe("opérateur manquant avant 'neg'"));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                if !prev_was_value {
                    return Err(ErreurCalcul::syntaxe(format!(
                        "opérande manquant avant '{}'",
                        symbole(tok)
                    )));
                }

                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (fonction reste collée à son argument)
                // - et la précédence exige de sortir l'opérateur du haut (tout est gauche à droite)
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || est_fonction(top) {
                        break;
                    }
                    if precedence(top) >= precedence(tok) {
                        if let Some(t) = ops.pop() {
                            out.push(t);
                        }
                    } else {
                        break;
                    }
                }

                ops.push(tok.clone());
                prev_was_value = false;
            }
        }
    }

    if !prev_was_value {
        return Err(ErreurCalcul::syntaxe("opérande manquant en fin d’expression"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::syntaxe(
                "parenthèses mal appariées : '(' non fermée",
            ));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
///
/// Chaque sous-arbre empilé garde sa profondeur (1 + max des enfants) :
/// au-delà de `max_profondeur`, échec `Limite` avant que l’arbre ne grandisse.
pub fn from_rpn(rpn: &[Tok], max_profondeur: usize) -> Result<Expr, ErreurCalcul> {
    let mut st: Vec<(Expr, usize)> = Vec::new();

    fn depile(st: &mut Vec<(Expr, usize)>, t: &Tok) -> Result<(Box<Expr>, usize), ErreurCalcul> {
        st.pop().map(|(e, p)| (Box::new(e), p)).ok_or_else(|| {
            ErreurCalcul::syntaxe(format!("opérande manquant pour '{}'", symbole(t)))
        })
    }

    let borne = |p: usize| -> Result<usize, ErreurCalcul> {
        let p = p + 1;
        if p > max_profondeur {
            return Err(ErreurCalcul::Limite(format!(
                "arbre trop profond (max {max_profondeur})"
            )));
        }
        Ok(p)
    };

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push((Expr::Nombre(*v), 1)),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let (b, pb) = depile(&mut st, tok)?;
                let (a, pa) = depile(&mut st, tok)?;
                let p = borne(pa.max(pb))?;

                let e = match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    Tok::Slash => Expr::Div(a, b),
                    _ => Expr::Pow(a, b),
                };
                st.push((e, p));
            }

            Tok::Neg => {
                let (x, px) = depile(&mut st, tok)?;
                st.push((Expr::Neg(x), borne(px)?));
            }

            Tok::Bang => {
                let (x, px) = depile(&mut st, tok)?;
                st.push((Expr::Factorielle(x), borne(px)?));
            }

            Tok::Ident(name) => {
                let f = Fonction::depuis_nom(name).ok_or_else(|| {
                    ErreurCalcul::non_supportee(format!("fonction inconnue : {name}"))
                })?;
                let (x, px) = depile(&mut st, tok)?;
                st.push((Expr::Appel(f, x), borne(px)?));
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurCalcul::syntaxe("parenthèse inattendue en RPN"))
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some((e, _)), true) => Ok(e),
        (None, _) => Err(ErreurCalcul::syntaxe("expression vide")),
        (Some(_), false) => Err(ErreurCalcul::syntaxe("opérateur manquant")),
    }
}
