//! Page footer with company links and contacts.

use leptos::prelude::*;

use super::site_header::SUPPORT_PHONE;

struct FooterColumn {
    title: &'static str,
    links: &'static [&'static str],
}

const COLUMNS: &[FooterColumn] = &[
    FooterColumn { title: "Компания", links: &["О нас", "Контакты", "Вакансии"] },
    FooterColumn { title: "Услуги", links: &["Каталог техники", "Доставка", "Оплата"] },
    FooterColumn { title: "Поддержка", links: &["Помощь", "FAQ", SUPPORT_PHONE] },
];

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__about">
                    <div class="site-footer__brand">
                        <span aria-hidden="true">"🏗️"</span>
                        <h3>"СпецТехника"</h3>
                    </div>
                    <p>"Аренда строительной техники по всей Москве"</p>
                </div>
                {COLUMNS
                    .iter()
                    .map(|column| {
                        view! {
                            <div class="site-footer__column">
                                <h4>{column.title}</h4>
                                <ul>{column.links.iter().map(|link| view! { <li>{*link}</li> }).collect_view()}</ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="site-footer__copyright">"© 2024 СпецТехника. Все права защищены."</div>
        </footer>
    }
}
