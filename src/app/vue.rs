// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran lecture seule + pavé 5×4 (mêmes touches que l’appli téléphone)
// - Clavier : chiffres / opérateurs tapés, Enter = "=", Backspace = DEL
//
// Note :
// - ESC (= C) est géré dans app.rs, une seule fois par frame.
// - Aucune logique de saisie ici : tout passe par AppCalc::appuyer.

use eframe::egui;

use super::etat::{AppCalc, Operateur, Touche};

/// Pavé, ligne par ligne (4 colonnes).
const PAVE: [[Touche; 4]; 5] = [
    [
        Touche::Effacer,
        Touche::Pourcent,
        Touche::Supprimer,
        Touche::Op(Operateur::Divise),
    ],
    [
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Op(Operateur::Fois),
    ],
    [
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Op(Operateur::Moins),
    ],
    [
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Op(Operateur::Plus),
    ],
    [
        Touche::DoubleZero,
        Touche::Chiffre(0),
        Touche::Point,
        Touche::Egal,
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        self.ui_clavier(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(48.0);

                let texte = egui::RichText::new(&self.ecran).monospace().size(28.0);
                if self.etat_erreur {
                    ui.colored_label(ui.visuals().error_fg_color, texte);
                } else {
                    ui.label(texte);
                }
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let resp = ui.add_sized([72.0, 48.0], egui::Button::new(touche.libelle()));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    /// Clavier physique : texte tapé + Enter / Backspace.
    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        let touches: Vec<Touche> = ui.input(|i| {
            let mut out = Vec::new();
            for ev in &i.events {
                match ev {
                    egui::Event::Text(t) => out.extend(t.chars().filter_map(touche_pour_char)),
                    egui::Event::Key {
                        key: egui::Key::Enter,
                        pressed: true,
                        ..
                    } => out.push(Touche::Egal),
                    egui::Event::Key {
                        key: egui::Key::Backspace,
                        pressed: true,
                        ..
                    } => out.push(Touche::Supprimer),
                    _ => {}
                }
            }
            out
        });

        for t in touches {
            self.appuyer(t);
        }
    }
}

/// Caractère tapé -> touche du pavé (None = ignoré).
fn touche_pour_char(c: char) -> Option<Touche> {
    let t = match c {
        '0'..='9' => Touche::Chiffre(c as u8 - b'0'),
        '.' | ',' => Touche::Point,
        '+' => Touche::Op(Operateur::Plus),
        '-' => Touche::Op(Operateur::Moins),
        '*' | 'x' | 'X' | '×' => Touche::Op(Operateur::Fois),
        '/' | '÷' => Touche::Op(Operateur::Divise),
        '%' => Touche::Pourcent,
        '=' => Touche::Egal,
        _ => return None,
    };
    Some(t)
}
