use yew::prelude::*;

use crate::interactions;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#process", "Process"),
    ("#work", "Work"),
    ("#team", "Team"),
    ("#contact", "Contact"),
];

const HERO_SLIDES: &[&str] = &[
    "/assets/hero-1.jpg",
    "/assets/hero-2.jpg",
    "/assets/hero-3.jpg",
];

const CLIENTS: &[&str] = &["Helix", "Northwind", "Parallax", "Orbital", "Quanta", "Lumen"];

const SERVICES: &[(&str, &str)] = &[
    ("Brand Strategy", "Positioning, naming and identity systems that scale."),
    ("Web Development", "Fast, accessible sites built on modern stacks."),
    ("Product Design", "Research-led interfaces for web and mobile."),
    ("Digital Marketing", "Campaigns measured against the numbers that matter."),
];

const PROCESS: &[(&str, &str)] = &[
    ("Discover", "We learn your market, audience and constraints."),
    ("Define", "Goals, scope and success metrics agreed up front."),
    ("Design", "Prototypes tested with real users before a line of code."),
    ("Deliver", "Launch, measure and iterate."),
];

const FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("branding", "Branding"),
    ("web", "Web"),
    ("marketing", "Marketing"),
];

const PORTFOLIO: &[(&str, &str)] = &[
    ("branding", "Atlas Rebrand"),
    ("web", "Fjord Commerce"),
    ("marketing", "Solstice Launch"),
    ("web", "Kite Dashboard"),
    ("branding", "Ember Coffee"),
    ("marketing", "Vantage Growth"),
];

const STATS: &[(u32, &str)] = &[
    (150, "Projects delivered"),
    (98, "Client retention %"),
    (12, "Industry awards"),
    (24, "Team members"),
];

const TEAM: &[(&str, &str)] = &[
    ("Maya Chen", "Creative Director"),
    ("Jonas Weber", "Lead Engineer"),
    ("Ana Ruiz", "Strategy Lead"),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("They turned a vague idea into a brand our customers recognise instantly.", "Laura P., Atlas"),
    ("Our conversion rate doubled within a quarter of launch.", "Tom K., Fjord"),
    ("The most organised agency we have worked with.", "Priya S., Kite"),
];

const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("branding", "Branding"),
    ("web", "Web Development"),
    ("design", "Product Design"),
    ("marketing", "Digital Marketing"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Wire the page once it is in the DOM; unmounting drops every listener.
    use_effect_with_deps(
        move |_| {
            let wired = interactions::init_all();
            move || drop(wired)
        },
        (),
    );

    html! {
        <div class="landing-page">
            <div class="preloader">
                <div class="preloader-logo">{"Nexus Dynamics"}</div>
                <div class="preloader-progress"><div class="progress-bar"></div></div>
                <div class="preloader-counter">{"0%"}</div>
            </div>

            <div class="cursor-default"></div>
            <div class="cursor-follower"></div>

            <header class="main-header">
                <a href="#hero" class="logo">{"Nexus"}<span>{"Dynamics"}</span></a>
                <nav class="main-nav">
                    { NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }).collect::<Html>() }
                </nav>
                <button class="mobile-menu-toggle" aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </header>

            <div class="mobile-menu">
                { NAV_LINKS.iter().map(|(href, label)| html! {
                    <a href={*href} class="mobile-nav-link">{*label}</a>
                }).collect::<Html>() }
            </div>

            <section id="hero" class="hero">
                <div class="hero-slideshow">
                    { HERO_SLIDES.iter().map(|src| html! {
                        <div class="slide" style={format!("background-image: url('{}')", src)}></div>
                    }).collect::<Html>() }
                </div>
                <div id="particles-js"></div>
                <div class="hero-content">
                    <h1 class="hero-title">
                        <span class="title-line"><span>{"We build"}</span></span>
                        <span class="title-line"><span>{"digital experiences"}</span></span>
                        <span class="title-line"><span>{"that move people."}</span></span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Strategy, design and engineering for brands that refuse to stand still."}
                    </p>
                    <div class="hero-cta">
                        <a href="#contact" class="btn btn-primary">{"Start a project"}</a>
                        <a href="#work" class="btn btn-outline">{"See our work"}</a>
                    </div>
                </div>
                <div class="hero-scroll-indicator"><span>{"Scroll"}</span></div>
            </section>

            <section class="clients">
                <div class="marquee">
                    <div class="marquee-track">
                        { CLIENTS.iter().map(|name| html! {
                            <div class="marquee-item">{*name}</div>
                        }).collect::<Html>() }
                    </div>
                </div>
            </section>

            <section id="services" class="services" data-aos="fade-up">
                <h2 class="section-title">{"What we do"}</h2>
                <div class="services-grid">
                    { SERVICES.iter().map(|(title, text)| html! {
                        <div class="service-card">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }).collect::<Html>() }
                </div>
            </section>

            <section id="process" class="process">
                <h2 class="section-title">{"How we work"}</h2>
                { PROCESS.iter().enumerate().map(|(i, (title, text))| html! {
                    <div class="process-item">
                        <span class="process-number">{format!("0{}", i + 1)}</span>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }).collect::<Html>() }
            </section>

            <section id="work" class="portfolio">
                <h2 class="section-title">{"Selected work"}</h2>
                <div class="portfolio-filters">
                    { FILTERS.iter().enumerate().map(|(i, (value, label))| html! {
                        <button class={classes!("filter-btn", (i == 0).then_some("active"))} data-filter={*value}>
                            {*label}
                        </button>
                    }).collect::<Html>() }
                </div>
                <div class="portfolio-grid">
                    { PORTFOLIO.iter().map(|(category, title)| html! {
                        <div class="portfolio-item" data-category={*category}>
                            <h3>{*title}</h3>
                            <span>{*category}</span>
                        </div>
                    }).collect::<Html>() }
                </div>
            </section>

            <section class="stats">
                { STATS.iter().map(|(count, label)| html! {
                    <div class="stat">
                        <span class="stat-number" data-count={count.to_string()}>{"0"}</span>
                        <span class="stat-label">{*label}</span>
                    </div>
                }).collect::<Html>() }
            </section>

            <section id="team" class="team">
                <h2 class="section-title">{"The team"}</h2>
                { TEAM.iter().map(|(name, role)| html! {
                    <div class="team-member">
                        <h3>{*name}</h3>
                        <p>{*role}</p>
                    </div>
                }).collect::<Html>() }
            </section>

            <section class="testimonials">
                <h2 class="section-title">{"Kind words"}</h2>
                <div class="testimonial-slider">
                    <div class="slider-track">
                        { TESTIMONIALS.iter().map(|(quote, author)| html! {
                            <div class="testimonial-slide">
                                <blockquote>{*quote}</blockquote>
                                <cite>{*author}</cite>
                            </div>
                        }).collect::<Html>() }
                    </div>
                    <button class="slider-prev" aria-label="Previous">{"‹"}</button>
                    <button class="slider-next" aria-label="Next">{"›"}</button>
                    <div class="slider-dots"></div>
                </div>
            </section>

            <section id="contact" class="contact">
                <h2 class="section-title">{"Let's talk"}</h2>
                <form id="contactForm" class="contact-form">
                    <div class="form-group">
                        <label for="name">{"Name"}</label>
                        <input type="text" id="name" name="name" />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input type="text" id="email" name="email" inputmode="email" />
                    </div>
                    <div class="form-group">
                        <label for="phone">{"Phone (optional)"}</label>
                        <input type="tel" id="phone" name="phone" />
                    </div>
                    <div class="form-group">
                        <label for="service">{"Service"}</label>
                        <select id="service" name="service">
                            <option value="">{"Select a service"}</option>
                            { SERVICE_OPTIONS.iter().map(|(value, label)| html! {
                                <option value={*value}>{*label}</option>
                            }).collect::<Html>() }
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="message">{"Message"}</label>
                        <textarea id="message" name="message" rows="5" />
                    </div>
                    <button type="submit" class="btn btn-primary">{"Send Message"}</button>
                </form>
            </section>

            <footer class="main-footer">
                <p>{"© "}<span id="currentYear"></span>{" Nexus Dynamics. All rights reserved."}</p>
            </footer>

            <a href="#" class="back-to-top" aria-label="Back to top">{"↑"}</a>
        </div>
    }
}
