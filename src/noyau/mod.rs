//! Noyau de la calculatrice (f64, sans UI)
//!
//! Organisation interne :
//! - eval.rs      : descente récursive (expression / term / factor)
//! - erreur.rs    : erreurs typées (syntaxe, nombre invalide, imbrication)
//! - pourcent.rs  : touche “%” (un nombre / 100)
//! - affichage.rs : rendu texte d’un résultat f64

pub mod affichage;
pub mod erreur;
pub mod eval;
pub mod pourcent;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use affichage::format_resultat;
pub use erreur::ErreurCalcul;
pub use eval::evaluate;
pub use pourcent::percent;
