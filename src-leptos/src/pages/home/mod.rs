//! The single portfolio page, sections in fixed vertical order

pub(crate) mod about;
pub(crate) mod contact;
pub(crate) mod footer;
pub(crate) mod hero;
pub(crate) mod projects;
pub(crate) mod services;
pub(crate) mod shorts;

use about::AboutSection;
use contact::ContactSection;
use footer::Footer;
use hero::HeroSection;
use projects::ProjectsSection;
use services::ServicesSection;
use shorts::ShortsSection;

use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <HeroSection />
        <AboutSection />
        <ProjectsSection />
        <ShortsSection />
        <ServicesSection />
        <ContactSection />
        <Footer />
    }
}
