// Shared fixtures for the integration tests

#![allow(dead_code)]

use reavital::html::content::text_content;
use reavital::html::dom::get_node_attr;
use reavital::html::style::get_style_property;
use reavital::{MemoryStorage, Page, PageOptions};

/// A trimmed-down copy of the site's landing page
pub const SITE_HTML: &str = r##"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="utf-8">
    <title data-lang-es="Masajes ReaVital" data-lang-en="ReaVital Massages">Masajes ReaVital</title>
    <meta name="description" content="Masajes terapéuticos" data-lang-es="Masajes terapéuticos" data-lang-en="Therapeutic massages">
    <meta property="og:title" content="Masajes ReaVital" data-lang-es="Masajes ReaVital" data-lang-en="ReaVital Massages">
    <meta property="og:description" content="Relájate" data-lang-es="Relájate" data-lang-en="Relax">
</head>
<body>
    <header class="header">
        <button id="menuToggle"><i id="menuIcon" class="fas fa-bars"></i></button>
        <nav id="mainNav">
            <a class="nav-link" href="#inicio" id="link-home" data-lang-es="Inicio" data-lang-en="Home">Inicio</a>
            <a class="nav-link" href="#servicios" id="link-services" data-lang-es="Servicios" data-lang-en="Services">Servicios</a>
        </nav>
        <div class="lang-switch">
            <button class="lang-btn active" data-lang="es" id="btn-es" aria-pressed="true">ES</button>
            <button class="lang-btn" data-lang="en" id="btn-en" aria-pressed="false"><span id="btn-en-label">EN</span></button>
        </div>
    </header>
    <main>
        <h1 id="hero" data-lang-es="Bienvenido a &lt;strong&gt;ReaVital&lt;/strong&gt;" data-lang-en="Welcome to &lt;strong&gt;ReaVital&lt;/strong&gt;">Bienvenido a <strong>ReaVital</strong></h1>
        <p id="intro" data-lang-es="Tu bienestar es lo primero" data-lang-en="Your wellbeing comes first">Tu bienestar es lo primero</p>
        <p id="only-es" data-lang-es="Solo en español">Solo en español</p>
        <a id="contact" href="#contacto" aria-label="Escríbenos" data-lang-es="Escríbenos" data-lang-en="Write to us">Escríbenos</a>
        <img id="room" src="sala.jpg" alt="Sala de masajes" data-lang-es="Sala de masajes" data-lang-en="Massage room">
        <div id="placeholder" class="image-placeholder" data-lang-es="&lt;span data-lang-es=&quot;Imagen próximamente&quot; data-lang-en=&quot;Image coming soon&quot;&gt;Imagen próximamente&lt;/span&gt;" data-lang-en="&lt;span data-lang-es=&quot;Imagen próximamente&quot; data-lang-en=&quot;Image coming soon&quot;&gt;Imagen próximamente&lt;/span&gt;"><span data-lang-es="Imagen próximamente" data-lang-en="Image coming soon">Imagen próximamente</span></div>
        <section class="gallery">
            <div class="gallery-slide" id="slide-0">1</div>
            <div class="gallery-slide" id="slide-1">2</div>
            <div class="gallery-slide" id="slide-2">3</div>
            <div class="gallery-slide" id="slide-3">4</div>
            <div class="gallery-controls" id="controls">
                <button class="prev-btn" id="prev">&lt;</button>
                <span class="dot" id="dot-0"></span>
                <span class="dot" id="dot-1"></span>
                <span class="dot" id="dot-2"></span>
                <span class="dot" id="dot-3"></span>
                <button class="next-btn" id="next">&gt;</button>
            </div>
        </section>
        <div id="dynamic"></div>
    </main>
</body>
</html>
"##;

pub fn load(html: &str, locale: Option<&str>, storage: MemoryStorage) -> Page {
    let options = PageOptions {
        locale: locale.map(str::to_string),
        ..PageOptions::default()
    };
    Page::load(html.as_bytes(), options, Box::new(storage)).expect("fixture should parse")
}

pub fn site_page(locale: Option<&str>, storage: MemoryStorage) -> Page {
    load(SITE_HTML, locale, storage)
}

pub fn text_of(page: &Page, id: &str) -> String {
    text_content(&page.element_by_id(id).expect("element should exist"))
}

pub fn attr_of(page: &Page, id: &str, attr: &str) -> Option<String> {
    get_node_attr(&page.element_by_id(id).expect("element should exist"), attr)
}

pub fn has_class_id(page: &Page, id: &str, class: &str) -> bool {
    reavital::html::dom::has_class(&page.element_by_id(id).expect("element should exist"), class)
}

pub fn html_lang(page: &Page) -> Option<String> {
    get_node_attr(&page.document_element().expect("document has <html>"), "lang")
}

pub fn body_style(page: &Page, property: &str) -> Option<String> {
    get_style_property(&page.body().expect("document has <body>"), property)
}
