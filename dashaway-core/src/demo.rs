//! Textos de demonstração exibidos na interface.
//!
//! Cada par é `(rótulo, texto)`. Os três primeiros concentram problemas de
//! categorias diferentes; os dois últimos servem de contraste e não devem
//! gerar nenhuma marcação.

/// Retorna a lista de textos de exemplo.
pub fn demo_texts() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Comunicado corporativo",
            "At the end of the day, our cross-functional teams need to leverage synergy across the ecosystem. We will circle back next week to align on best practices, pick the low-hanging fruit and move the needle on actionable insights. This is a game changer—make no mistake.",
        ),
        (
            "Blog gerado por IA",
            "In today's fast-paced world, it's important to note that technology plays a crucial role in our lives. Let's dive in and delve into the rich tapestry of ideas that shape this ever-evolving landscape. Furthermore, innovation is a testament to human curiosity—and it undoubtedly fosters growth.",
        ),
        (
            "E-mail de vendas",
            "Hi Sam — I hope this finds you well. Our state-of-the-art, AI-powered platform delivers a seamless, frictionless experience that will unlock new possibilities for your team. Feel free to book a call so we can touch base and make sure we're all on the same page.",
        ),
        (
            "Relatório técnico",
            "The migration moved forty services to the new cluster over two weekends. Most of them started without changes. Three needed a larger memory limit, and one failed because a config file still pointed at the old database host. We fixed the path, reran the checks, and closed the ticket on Friday.",
        ),
        (
            "Texto limpo",
            "The bakery on the corner opens at six. By seven the line reaches the door, and the smell of warm bread drifts down the street. Most people buy a loaf and a coffee, then walk to the park to eat on the benches by the pond.",
        ),
    ]
}
