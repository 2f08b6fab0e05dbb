//! Static service catalog backing `/service/:slug`.

pub const CONTACT_EMAIL: &str = "info@nzinga.ao";
pub const CONTACT_PHONE: &str = "+244 923 456 789";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Megaphone,
    Globe,
    Palette,
    Layout,
    Clipboard,
    Info,
}

#[derive(Debug, PartialEq)]
pub struct ProcessStep {
    pub step_number: u32,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct RelatedProject {
    pub id: u32,
    pub title: &'static str,
    pub image_url: &'static str,
    pub client: &'static str,
    pub category: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ServiceRecord {
    pub slug: &'static str,
    pub title: &'static str,
    pub short_description: &'static str,
    pub long_description: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub process_steps: &'static [ProcessStep],
    pub related_projects: &'static [RelatedProject],
    pub cover_image_url: &'static str,
    pub icon: ServiceIcon,
}

impl ServiceRecord {
    pub fn href(&self) -> String {
        format!("/service/{}", self.slug)
    }

    pub fn mailto_href(&self) -> String {
        format!(
            "mailto:{}?subject={}",
            CONTACT_EMAIL,
            urlencoding::encode(&format!("Consultoria sobre {}", self.title))
        )
    }
}

pub fn all() -> &'static [ServiceRecord] {
    SERVICES
}

const IMG_BANK: &str = "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600";
const IMG_FESTIVAL: &str = "https://images.unsplash.com/photo-1561070791-2526d30994b5?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600";
const IMG_LAUNCH: &str = "https://images.unsplash.com/photo-1600880292089-90a7e086ee0c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600";
const IMG_EDUCATION: &str = "https://images.unsplash.com/photo-1600880292089-90a7e086ee0c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600&crop=entropy";
const IMG_TOURISM: &str = "https://images.unsplash.com/photo-1558655146-9f40138edfeb?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600";
const IMG_HEALTH: &str = "https://images.unsplash.com/photo-1551650975-87deedd944c3?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600";

static SERVICES: &[ServiceRecord] = &[
    ServiceRecord {
        slug: "estrategia-de-marca",
        title: "Estratégia de Marca",
        short_description: "Desenvolvemos identidades de marca autênticas que conectam sua empresa ao seu público-alvo e diferenciam-na da concorrência.",
        long_description: &[
            "Nossa abordagem de Estratégia de Marca é construída sobre uma profunda compreensão do seu negócio, mercado e público-alvo. Combinamos pesquisa de mercado, análise competitiva e insights de consumidores para desenvolver uma identidade de marca que ressoe com seu público e destaque sua empresa da concorrência.",
            "Através do nosso processo, definimos claramente a essência da sua marca — sua missão, visão, valores e posicionamento único no mercado. Estes elementos fundamentais guiam todas as expressões visuais e verbais da sua marca, garantindo consistência e impacto em todos os pontos de contato com o cliente.",
            "Nossa equipe de estrategistas e designers trabalha em conjunto para traduzir esses insights em elementos visuais memoráveis e mensagens impactantes que capturam a essência da sua marca e comunicam seu valor único para o mercado.",
        ],
        benefits: &[
            "Diferenciação clara da concorrência",
            "Consistência em todos os pontos de contato",
            "Conexão emocional com o público-alvo",
            "Maior reconhecimento e lembrança de marca",
            "Base sólida para estratégias de marketing e comunicação",
            "Aumento do valor percebido do produto ou serviço",
        ],
        process_steps: &[
            ProcessStep { step_number: 1, title: "Descoberta e Pesquisa", description: "Conduzimos pesquisas detalhadas para entender seu mercado, concorrentes e público-alvo, além de workshops e entrevistas para compreender os valores e a visão da sua empresa." },
            ProcessStep { step_number: 2, title: "Estratégia e Posicionamento", description: "Desenvolvemos o posicionamento estratégico da sua marca, definindo claramente sua proposta de valor, personalidade, voz e mensagens-chave." },
            ProcessStep { step_number: 3, title: "Identidade Visual", description: "Criamos elementos visuais distintivos incluindo logo, cores, tipografia e sistema de design que refletem o posicionamento e os valores da marca." },
            ProcessStep { step_number: 4, title: "Guia de Marca", description: "Documentamos todas as diretrizes visuais e estratégicas em um guia abrangente para garantir consistência em todas as aplicações futuras." },
            ProcessStep { step_number: 5, title: "Implementação e Treinamento", description: "Auxiliamos na implementação da nova identidade e oferecemos treinamento para sua equipe sobre a aplicação correta dos elementos da marca." },
        ],
        related_projects: &[
            RelatedProject { id: 1, title: "Rebranding Corporativo Banco Nacional", image_url: IMG_BANK, client: "Banco Nacional de Angola", category: "Identidade Visual" },
            RelatedProject { id: 2, title: "Identidade Visual Festival Cultural", image_url: IMG_FESTIVAL, client: "Festival de Artes de Angola", category: "Identidade Visual" },
        ],
        cover_image_url: "https://images.unsplash.com/photo-1524758631624-e2822e304c36?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&h=800&q=80",
        icon: ServiceIcon::Megaphone,
    },
    ServiceRecord {
        slug: "marketing-digital",
        title: "Marketing Digital",
        short_description: "Transformamos sua presença online com estratégias que geram resultados mensuráveis e conversões efetivas.",
        long_description: &[
            "No ambiente digital altamente competitivo de hoje, uma estratégia de marketing digital bem executada é essencial para o sucesso do seu negócio. Na Nzinga, oferecemos soluções abrangentes de marketing digital que aumentam sua visibilidade online, geram leads qualificados e impulsionam as conversões.",
            "Nossa equipe de especialistas em marketing digital combina análise de dados, criatividade e conhecimento técnico para desenvolver estratégias personalizadas que atendem às necessidades específicas do seu negócio. Utilizamos as mais recentes ferramentas e técnicas para garantir que sua marca se destaque no espaço digital e alcance seu público-alvo de maneira eficaz.",
            "Nosso foco está em entregar resultados mensuráveis e um retorno significativo sobre seu investimento. Através de monitoramento contínuo e otimização, refinamos constantemente nossas estratégias para maximizar o desempenho e garantir que você esteja sempre à frente da concorrência no mercado digital.",
        ],
        benefits: &[
            "Aumento do alcance e da visibilidade da marca",
            "Geração de leads qualificados",
            "Melhor engajamento com o público-alvo",
            "Aumento mensurável nas conversões e vendas",
            "Otimização do investimento em marketing",
            "Insights valiosos sobre o comportamento do cliente",
            "Capacidade de adaptar estratégias em tempo real",
        ],
        process_steps: &[
            ProcessStep { step_number: 1, title: "Auditoria e Estratégia", description: "Analisamos sua presença digital atual, identificamos oportunidades e desenvolvemos uma estratégia personalizada alinhada aos seus objetivos de negócio." },
            ProcessStep { step_number: 2, title: "SEO e Conteúdo", description: "Otimizamos seu site para mecanismos de busca e criamos conteúdo relevante que atrai e engaja seu público-alvo, estabelecendo sua autoridade no setor." },
            ProcessStep { step_number: 3, title: "Publicidade Digital", description: "Implementamos campanhas de mídia paga estrategicamente direcionadas em plataformas como Google Ads, Facebook, Instagram e LinkedIn para maximizar o ROI." },
            ProcessStep { step_number: 4, title: "Gestão de Redes Sociais", description: "Desenvolvemos e executamos estratégias de mídia social que aumentam o engajamento, constroem comunidade e fortalecem a conexão com seus clientes." },
            ProcessStep { step_number: 5, title: "Análise e Otimização", description: "Monitoramos continuamente o desempenho de todas as iniciativas digitais, fornecendo relatórios detalhados e ajustando estratégias para melhorar resultados." },
        ],
        related_projects: &[
            RelatedProject { id: 3, title: "Campanha Lançamento Smartphone X10", image_url: IMG_LAUNCH, client: "Telecom Angola", category: "Marketing Digital" },
            RelatedProject { id: 4, title: "Campanha Social 'Educação Para Todos'", image_url: IMG_EDUCATION, client: "Ministério da Educação", category: "Campanha Social" },
        ],
        cover_image_url: "https://images.unsplash.com/photo-1562577309-4932fdd64cd1?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&h=800&q=80",
        icon: ServiceIcon::Globe,
    },
    ServiceRecord {
        slug: "design-grafico",
        title: "Design Gráfico",
        short_description: "Criamos soluções visuais que comunicam a essência da sua marca com impacto e elegância.",
        long_description: &[
            "Design é mais do que estética — é uma poderosa ferramenta de comunicação. Na Nzinga, nossos designers gráficos são mestres em transformar conceitos abstratos em visuais impactantes que transmitem a essência da sua marca e mensagem com clareza e beleza.",
            "Cada projeto de design que desenvolvemos começa com uma profunda compreensão da sua marca, objetivos e público-alvo. Acreditamos que o design eficaz deve ser estratégico, resolvendo problemas específicos de comunicação enquanto cria experiências visuais memoráveis que cativam seu público.",
            "Nossa equipe combina criatividade artística com pensamento estratégico para criar designs que se destacam no mercado competitivo. Seja um logotipo distintivo, material impresso elegante ou infográficos informativos, nossa abordagem equilibra forma e função para produzir resultados que encantam visualmente enquanto comunicam com eficácia.",
        ],
        benefits: &[
            "Comunicação visual clara e impactante",
            "Consistência em todos os materiais da marca",
            "Diferenciação da concorrência através do design distintivo",
            "Aumento da percepção de profissionalismo e qualidade",
            "Melhor retenção da mensagem pelo público-alvo",
            "Designs adaptáveis para diferentes plataformas e necessidades",
        ],
        process_steps: &[
            ProcessStep { step_number: 1, title: "Briefing e Descoberta", description: "Realizamos uma análise detalhada das suas necessidades, objetivos, público-alvo e posicionamento da marca para estabelecer as bases do projeto." },
            ProcessStep { step_number: 2, title: "Pesquisa e Conceituação", description: "Conduzimos pesquisas para informar nossa abordagem criativa e desenvolvemos conceitos iniciais que alinham-se com sua estratégia de marca." },
            ProcessStep { step_number: 3, title: "Design e Visualização", description: "Transformamos os conceitos selecionados em designs refinados, utilizando princípios de design, teoria das cores e tipografia para criar visuais impactantes." },
            ProcessStep { step_number: 4, title: "Revisão e Refinamento", description: "Apresentamos os designs para feedback e realizamos refinamentos para garantir que o resultado final atenda perfeitamente às suas expectativas." },
            ProcessStep { step_number: 5, title: "Finalização e Entrega", description: "Preparamos e entregamos arquivos finais otimizados para todos os usos necessários, incluindo diretrizes de aplicação quando relevante." },
        ],
        related_projects: &[
            RelatedProject { id: 5, title: "Identidade Visual Festival Cultural", image_url: IMG_FESTIVAL, client: "Festival de Artes de Angola", category: "Identidade Visual" },
            RelatedProject { id: 6, title: "Rebranding Corporativo Banco Nacional", image_url: IMG_BANK, client: "Banco Nacional de Angola", category: "Identidade Visual" },
        ],
        cover_image_url: "https://images.unsplash.com/photo-1626785774573-4b799315345d?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&h=800&q=80",
        icon: ServiceIcon::Palette,
    },
    ServiceRecord {
        slug: "web-design",
        title: "Web Design",
        short_description: "Criamos websites e aplicações web que combinam design excepcional com funcionalidade intuitiva.",
        long_description: &[
            "No mundo digital de hoje, seu website muitas vezes é o primeiro ponto de contato entre sua marca e potenciais clientes. Na Nzinga, criamos experiências digitais que não apenas impressionam visualmente, mas também são estrategicamente projetadas para converter visitantes em clientes.",
            "Nossa abordagem para web design combina princípios de design centrado no usuário (UX/UI) com estratégias de marketing digital para criar sites que são bonitos, funcionais e eficazes em atingir seus objetivos de negócio. Cada site que desenvolvemos é cuidadosamente personalizado para refletir a identidade única da sua marca e atender às necessidades específicas do seu público.",
            "Além da estética visual, focamos na usabilidade, acessibilidade e otimização para mecanismos de busca (SEO), garantindo que seu site não apenas atraia visitantes, mas também ofereça uma experiência excepcional que os converta em clientes leais.",
        ],
        benefits: &[
            "Experiência do usuário intuitiva e agradável",
            "Design responsivo para todos os dispositivos",
            "Melhor desempenho nos mecanismos de busca",
            "Taxas de conversão otimizadas",
            "Tempo de carregamento rápido",
            "Integração perfeita com plataformas de marketing digital",
            "Site de fácil manutenção e atualização",
        ],
        process_steps: &[
            ProcessStep { step_number: 1, title: "Estratégia e Planejamento", description: "Definimos os objetivos do seu site, mapeamos a jornada do usuário e determinamos a arquitetura da informação ideal para uma experiência otimizada." },
            ProcessStep { step_number: 2, title: "Wireframing e Protótipos", description: "Criamos wireframes e protótipos interativos que permitem visualizar a estrutura e funcionalidade do site antes do design visual completo." },
            ProcessStep { step_number: 3, title: "Design Visual", description: "Desenvolvemos o design visual do site, incorporando os elementos da sua identidade de marca e criando uma interface atraente e intuitiva." },
            ProcessStep { step_number: 4, title: "Desenvolvimento", description: "Transformamos o design em um site funcional utilizando as tecnologias mais adequadas, garantindo código limpo, responsivo e otimizado." },
            ProcessStep { step_number: 5, title: "Testes e Lançamento", description: "Realizamos testes rigorosos em diversos dispositivos e navegadores para garantir funcionalidade perfeita, seguido pelo lançamento e monitoramento inicial." },
        ],
        related_projects: &[
            RelatedProject { id: 7, title: "Website Turismo Luanda", image_url: IMG_TOURISM, client: "Departamento de Turismo", category: "Web Design" },
            RelatedProject { id: 8, title: "Aplicativo Móvel Saúde+", image_url: IMG_HEALTH, client: "Global Health Initiative", category: "Desenvolvimento" },
        ],
        cover_image_url: "https://images.unsplash.com/photo-1487058792275-0ad4aaf24ca7?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&h=800&q=80",
        icon: ServiceIcon::Layout,
    },
    ServiceRecord {
        slug: "gestao-de-conteudo",
        title: "Gestão de Conteúdo",
        short_description: "Produzimos conteúdo estratégico que comunica sua mensagem, aumenta seu alcance e estabelece sua autoridade no setor.",
        long_description: &[
            "O conteúdo é o coração de qualquer estratégia de marketing digital bem-sucedida. Na Nzinga, ajudamos você a contar a história da sua marca de maneira autêntica e impactante, criando conteúdo que ressoa com seu público e impulsiona resultados de negócio.",
            "Nossa equipe de redatores, estrategistas de conteúdo e especialistas em SEO trabalha em conjunto para desenvolver e implementar uma estratégia de conteúdo abrangente que posiciona sua marca como autoridade em seu setor. Desde blogs envolventes e artigos técnicos até posts de mídia social e e-mails persuasivos, criamos conteúdos que educam, inspiram e convertem.",
            "Entendemos que cada palavra conta. Por isso, dedicamos tempo para compreender profundamente o seu negócio, público-alvo e objetivos, garantindo que cada peça de conteúdo que criamos seja estrategicamente alinhada com sua visão e otimizada para máximo impacto.",
        ],
        benefits: &[
            "Maior engajamento com seu público-alvo",
            "Melhor classificação nos mecanismos de busca",
            "Estabelecimento de autoridade no seu setor",
            "Aumento do tráfego para o site e plataformas digitais",
            "Maior taxa de conversão e geração de leads",
            "Construção e fortalecimento do relacionamento com clientes",
            "Conteúdo que reflete e reforça sua identidade de marca",
        ],
        process_steps: &[
            ProcessStep { step_number: 1, title: "Auditoria e Estratégia", description: "Analisamos o conteúdo existente, a presença digital atual e desenvolvemos uma estratégia personalizada alinhada aos seus objetivos e público-alvo." },
            ProcessStep { step_number: 2, title: "Planejamento de Conteúdo", description: "Criamos um calendário editorial detalhado e identificamos temas, formatos e canais prioritários para maximizar o impacto do seu conteúdo." },
            ProcessStep { step_number: 3, title: "Criação e Produção", description: "Nossa equipe de redatores especializados desenvolve conteúdo de alta qualidade, otimizado para SEO e alinhado à voz da sua marca." },
            ProcessStep { step_number: 4, title: "Distribuição e Promoção", description: "Implantamos estratégias eficazes para distribuir seu conteúdo nos canais apropriados e amplificar seu alcance através de técnicas de promoção." },
            ProcessStep { step_number: 5, title: "Análise e Otimização", description: "Monitoramos o desempenho do conteúdo, fornecemos relatórios detalhados e refinamos continuamente a estratégia com base nos resultados obtidos." },
        ],
        related_projects: &[
            RelatedProject { id: 9, title: "Campanha Social 'Educação Para Todos'", image_url: IMG_EDUCATION, client: "Ministério da Educação", category: "Campanha Social" },
            RelatedProject { id: 10, title: "Campanha Lançamento Smartphone X10", image_url: IMG_LAUNCH, client: "Telecom Angola", category: "Marketing Digital" },
        ],
        cover_image_url: "https://images.unsplash.com/photo-1499750310107-5fef28a66643?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&h=800&q=80",
        icon: ServiceIcon::Clipboard,
    },
    ServiceRecord {
        slug: "consultoria-estrategica",
        title: "Consultoria Estratégica",
        short_description: "Oferecemos consultoria especializada para ajudar sua empresa a identificar oportunidades de crescimento, superar desafios e implementar estratégias eficazes.",
        long_description: &[
            "No cenário de negócios em rápida evolução de hoje, ter a orientação certa pode fazer toda a diferença para o sucesso da sua empresa. Nossa consultoria estratégica oferece insights perspicazes e orientação prática para ajudar sua organização a navegar por desafios complexos e aproveitar novas oportunidades de crescimento.",
            "Nossa equipe de consultores combina experiência em diversos setores com um profundo conhecimento do mercado africano e global. Colaboramos estreitamente com você para compreender as nuances do seu negócio, identificar áreas de melhoria e desenvolver estratégias personalizadas que impulsionam resultados tangíveis.",
            "Seja você uma startup em busca de direcionamento, uma empresa estabelecida em fase de expansão ou uma organização enfrentando transformações no mercado, nossas soluções de consultoria fornecem o apoio estratégico de que você precisa para tomar decisões informadas e alcançar seus objetivos de negócio.",
        ],
        benefits: &[
            "Clareza estratégica e direcionamento para seu negócio",
            "Identificação de novas oportunidades de crescimento",
            "Soluções para desafios complexos de negócio",
            "Estratégias baseadas em dados e insights de mercado",
            "Melhoria de processos e eficiência operacional",
            "Desenvolvimento de vantagens competitivas sustentáveis",
            "Acesso a especialistas com vasta experiência em diferentes setores",
        ],
        process_steps: &[
            ProcessStep { step_number: 1, title: "Avaliação e Diagnóstico", description: "Realizamos uma análise abrangente da sua situação atual, identificando pontos fortes, fracos, oportunidades e ameaças para formar uma base sólida para o trabalho." },
            ProcessStep { step_number: 2, title: "Definição de Objetivos", description: "Colaboramos com você para estabelecer objetivos claros, mensuráveis e alcançáveis que impulsionarão o crescimento e o sucesso do seu negócio." },
            ProcessStep { step_number: 3, title: "Desenvolvimento de Estratégia", description: "Criamos estratégias personalizadas e planos de ação detalhados alinhados aos seus objetivos e adaptados às realidades específicas do seu mercado." },
            ProcessStep { step_number: 4, title: "Implementação", description: "Oferecemos suporte prático durante a implementação, ajudando sua equipe a executar as estratégias desenvolvidas e a superar obstáculos que possam surgir." },
            ProcessStep { step_number: 5, title: "Avaliação e Refinamento", description: "Monitoramos o progresso, avaliamos os resultados em relação aos objetivos estabelecidos e refinamos as estratégias conforme necessário para otimizar os resultados." },
        ],
        related_projects: &[
            RelatedProject { id: 11, title: "Rebranding Corporativo Banco Nacional", image_url: IMG_BANK, client: "Banco Nacional de Angola", category: "Identidade Visual" },
            RelatedProject { id: 12, title: "Campanha Social 'Educação Para Todos'", image_url: IMG_EDUCATION, client: "Ministério da Educação", category: "Campanha Social" },
        ],
        cover_image_url: "https://images.unsplash.com/photo-1517048676732-d65bc937f952?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&h=800&q=80",
        icon: ServiceIcon::Info,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique_and_url_safe() {
        let mut seen = HashSet::new();
        for service in all() {
            assert!(seen.insert(service.slug), "duplicate slug {}", service.slug);
            assert!(!service.slug.is_empty());
            assert!(service
                .slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn process_steps_are_sequential_from_one() {
        for service in all() {
            let numbers: Vec<u32> = service.process_steps.iter().map(|s| s.step_number).collect();
            let expected: Vec<u32> = (1..=service.process_steps.len() as u32).collect();
            assert_eq!(numbers, expected, "{}", service.slug);
        }
    }

    #[test]
    fn related_project_ids_are_unique_across_catalog() {
        let mut ids = HashSet::new();
        for project in all().iter().flat_map(|s| s.related_projects.iter()) {
            assert!(ids.insert(project.id), "duplicate project id {}", project.id);
        }
    }

    #[test]
    fn mailto_encodes_the_subject() {
        let service = all().iter().find(|s| s.slug == "design-grafico").unwrap();
        assert_eq!(
            service.mailto_href(),
            "mailto:info@nzinga.ao?subject=Consultoria%20sobre%20Design%20Gr%C3%A1fico"
        );
        assert_eq!(service.href(), "/service/design-grafico");
    }
}
