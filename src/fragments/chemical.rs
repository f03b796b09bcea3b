use super::{Fragment, Pattern};
use crate::models::question::QuestionType::*;

pub(super) const PATTERNS: &[Pattern] = &[
    Pattern::new("Thermodynamics", Conceptual, 4, "Explain how fugacity governs phase equilibrium in {context}, why {constraint} matters, and how {scenario} shifts the equilibrium."),
    Pattern::new("Thermodynamics", Coding, 7, "Write a flash-calculation routine for {context} that honours {constraint}, and show how you would check it against {scenario}."),
    Pattern::new("Thermodynamics", Design, 6, "Choose the equation of state and property package for {context} so it meets {constraint} and stays valid through {scenario}."),
    Pattern::new("Thermodynamics", Debugging, 7, "Simulated and measured compositions in {context} diverge after {scenario}. How would you find the error, given {constraint}?"),
    Pattern::new("Thermodynamics", Optimization, 8, "Under {constraint}, how would you cut the energy demand of {context} while staying stable during {scenario}?"),
    Pattern::new("Reaction Engineering", Conceptual, 5, "Explain when a CSTR beats a PFR for {context}, how {constraint} shifts the answer, and what happens during {scenario}."),
    Pattern::new("Reaction Engineering", Design, 7, "Size the reactor for {context} so it meets {constraint} and stays controllable during {scenario}."),
    Pattern::new("Reaction Engineering", Debugging, 8, "Conversion in {context} falls steadily after {scenario}. How would you diagnose catalyst or kinetics problems under {constraint}?"),
    Pattern::new("Reaction Engineering", Security, 9, "How would you prevent a thermal runaway in {context} during {scenario} while honouring {constraint}?"),
    Pattern::new("Reaction Engineering", Coding, 6, "Write a kinetic model that fits rate constants for {context} under {constraint}, and explain how it extrapolates to {scenario}."),
    Pattern::new("Separations", Conceptual, 3, "Explain how reflux ratio trades against stage count in {context}, why {constraint} matters, and what changes during {scenario}."),
    Pattern::new("Separations", Design, 6, "Design the distillation train for {context} to meet {constraint} and handle {scenario}."),
    Pattern::new("Separations", Debugging, 7, "The column in {context} floods during {scenario}. Walk through your diagnosis, keeping {constraint} in mind."),
    Pattern::new("Separations", Optimization, 7, "How would you cut the reboiler duty of {context} under {constraint} without losing purity during {scenario}?"),
    Pattern::new("Separations", Scalability, 8, "How would you debottleneck the separation section of {context} for 30% more feed, through {scenario} and within {constraint}?"),
    Pattern::new("Transport Phenomena", Conceptual, 5, "Explain how mass-transfer and heat-transfer resistances interact in {context}, how {constraint} changes them, and which controls during {scenario}."),
    Pattern::new("Transport Phenomena", Design, 7, "Design the heat-integration network for {context} so it satisfies {constraint} and tolerates {scenario}."),
    Pattern::new("Transport Phenomena", Coding, 8, "Write a numerical model of diffusion with reaction in {context} under {constraint}, and show how it behaves during {scenario}."),
    Pattern::new("Transport Phenomena", Debugging, 6, "Fouling builds up fast in the exchangers of {context} after {scenario}. How would you find the cause, given {constraint}?"),
    Pattern::new("Transport Phenomena", Scalability, 7, "How would you scale mixing in {context} from pilot to production through {scenario} while meeting {constraint}?"),
    Pattern::new("Process Control", Conceptual, 4, "Explain why cascade control suits {context}, how {constraint} limits it, and what disturbance arrives during {scenario}."),
    Pattern::new("Process Control", Design, 6, "Design the control strategy for {context} so it meets {constraint} and rejects the upsets of {scenario}."),
    Pattern::new("Process Control", Debugging, 7, "A level loop in {context} cycles during {scenario}. How would you diagnose it under {constraint}?"),
    Pattern::new("Process Control", System, 8, "Build an alarm-management philosophy for {context} that keeps operators effective during {scenario} within {constraint}."),
    Pattern::new("Process Control", Architecture, 9, "Architect the basic process control and safety instrumented layers for {context} so they satisfy {constraint} and act independently during {scenario}."),
    Pattern::new("Process Safety", Security, 7, "How would you run a HAZOP for {context} that addresses {scenario} and respects {constraint}?"),
    Pattern::new("Process Safety", Conceptual, 5, "Explain layers of protection analysis for {context}, how {constraint} affects credit for each layer, and which layer fails first during {scenario}."),
    Pattern::new("Process Safety", Behavioral, 5, "Tell me how you would stop production on {context} during {scenario} when {constraint} puts pressure on you to continue."),
    Pattern::new("Process Safety", Design, 8, "Design the relief and flare system for {context} to cope with {scenario} while meeting {constraint}."),
    Pattern::new("Process Safety", System, 7, "Set up a management-of-change process for {context} that catches the risks of {scenario} and respects {constraint}."),
    Pattern::new("Materials & Polymers", Conceptual, 4, "Explain how molecular-weight distribution affects product quality in {context}, how {constraint} narrows your options, and what drifts during {scenario}."),
    Pattern::new("Materials & Polymers", Design, 6, "Select materials of construction for {context} that satisfy {constraint} and resist {scenario}."),
    Pattern::new("Materials & Polymers", Optimization, 7, "How would you raise yield in {context} under {constraint} without degrading product quality during {scenario}?"),
    Pattern::new("Materials & Polymers", Debugging, 6, "Off-spec batches come out of {context} after {scenario}. How would you trace the cause under {constraint}?"),
    Pattern::new("Materials & Polymers", Behavioral, 3, "Describe how you would explain a quality deviation in {context} to a customer after {scenario}, given {constraint}."),
    Pattern::new("Sustainability", Conceptual, 4, "Explain how a life-cycle assessment would rank options for {context}, why {constraint} matters, and how {scenario} changes the ranking."),
    Pattern::new("Sustainability", Design, 7, "Design a carbon-capture retrofit for {context} that meets {constraint} and keeps operating through {scenario}."),
    Pattern::new("Sustainability", Architecture, 8, "Set out a plant-wide electrification roadmap for {context} that honours {constraint} and stays resilient to {scenario}."),
    Pattern::new("Sustainability", Scalability, 6, "How would you scale a solvent-recovery scheme across {context} through {scenario} while meeting {constraint}?"),
    Pattern::new("Sustainability", Behavioral, 4, "Tell me how you would win management support for a waste-reduction project on {context} during {scenario} when {constraint} applies."),
];

pub(super) const CONTEXTS: &[Fragment] = &[
    Fragment::new("Petrochemical", 7, "an ethylene steam cracker"),
    Fragment::new("Petrochemical", 6, "a crude distillation unit"),
    Fragment::new("Petrochemical", 7, "a fluid catalytic cracking unit"),
    Fragment::new("Petrochemical", 6, "a natural-gas sweetening plant"),
    Fragment::new("Petrochemical", 8, "an offshore oil production platform"),
    Fragment::new("Chemicals", 6, "an ammonia synthesis loop"),
    Fragment::new("Chemicals", 5, "a sulphuric acid plant"),
    Fragment::new("Chemicals", 6, "a chlor-alkali electrolysis unit"),
    Fragment::new("Chemicals", 7, "a methanol plant"),
    Fragment::new("Pharma", 6, "a sterile injectable fill line"),
    Fragment::new("Pharma", 7, "a continuous API synthesis train"),
    Fragment::new("Pharma", 5, "a tablet granulation suite"),
    Fragment::new("Biotech", 7, "a mammalian-cell bioreactor"),
    Fragment::new("Biotech", 6, "a fermentation-based ethanol plant"),
    Fragment::new("Biotech", 5, "an enzyme purification line"),
    Fragment::new("Food", 4, "a dairy pasteurisation line"),
    Fragment::new("Food", 3, "a brewery wort boiling stage"),
    Fragment::new("Food", 4, "a spray-drying milk powder plant"),
    Fragment::new("Polymers", 6, "a polyethylene slurry reactor"),
    Fragment::new("Polymers", 5, "a PET recycling line"),
    Fragment::new("Polymers", 6, "a polyurethane foam plant"),
    Fragment::new("Energy", 7, "a green hydrogen electrolyser"),
    Fragment::new("Energy", 8, "a lithium refinery"),
    Fragment::new("Energy", 6, "a biogas upgrading unit"),
    Fragment::new("Energy", 7, "a nuclear fuel reprocessing step"),
    Fragment::new("Water", 5, "a reverse-osmosis desalination plant"),
    Fragment::new("Water", 4, "an industrial effluent treatment plant"),
    Fragment::new("Minerals", 6, "a copper leaching circuit"),
    Fragment::new("Minerals", 5, "a cement kiln"),
    Fragment::new("Specialty", 7, "a semiconductor-grade solvent purifier"),
];

pub(super) const CONSTRAINTS: &[Fragment] = &[
    Fragment::new("Safety", 7, "a SIL 3 shutdown requirement"),
    Fragment::new("Safety", 6, "ATEX hazardous-area zoning"),
    Fragment::new("Safety", 8, "a toxic inventory limit"),
    Fragment::new("Safety", 5, "inherently safer design principles"),
    Fragment::new("Environment", 6, "a 30% CO2 reduction target"),
    Fragment::new("Environment", 7, "zero liquid discharge"),
    Fragment::new("Environment", 5, "strict VOC emission limits"),
    Fragment::new("Environment", 6, "a water abstraction cap"),
    Fragment::new("Quality", 7, "GMP validation requirements"),
    Fragment::new("Quality", 6, "99.99% product purity"),
    Fragment::new("Quality", 5, "food-grade materials only"),
    Fragment::new("Quality", 6, "tight batch-to-batch consistency"),
    Fragment::new("Economics", 4, "a two-year payback period"),
    Fragment::new("Economics", 5, "existing equipment reuse"),
    Fragment::new("Economics", 3, "a limited capital budget"),
    Fragment::new("Economics", 5, "volatile feedstock prices"),
    Fragment::new("Operations", 6, "continuous 8,000-hour annual operation"),
    Fragment::new("Operations", 5, "a small operating crew"),
    Fragment::new("Operations", 4, "a turnaround every four years"),
    Fragment::new("Site", 6, "a congested brownfield plot"),
    Fragment::new("Site", 5, "limited cooling-water supply"),
    Fragment::new("Site", 7, "a remote desert location"),
    Fragment::new("Regulation", 7, "REACH registration limits"),
    Fragment::new("Regulation", 6, "Seveso III major-hazard duties"),
    Fragment::new("Regulation", 6, "OSHA process safety management"),
    Fragment::new("Feed", 6, "a variable-quality feedstock"),
    Fragment::new("Feed", 7, "a high-sulphur crude slate"),
    Fragment::new("Feed", 5, "a bio-based feed blend"),
    Fragment::new("Utilities", 5, "a fixed steam supply"),
    Fragment::new("Utilities", 6, "an unreliable power grid"),
];

pub(super) const SCENARIOS: &[Fragment] = &[
    Fragment::new("Upset", 8, "a loss of cooling water"),
    Fragment::new("Upset", 7, "a compressor trip"),
    Fragment::new("Upset", 7, "a feed composition swing"),
    Fragment::new("Upset", 6, "an instrument air failure"),
    Fragment::new("Upset", 8, "a runaway exotherm alarm"),
    Fragment::new("Upset", 6, "a power dip"),
    Fragment::new("Release", 9, "a flammable vapour release"),
    Fragment::new("Release", 8, "a toxic gas leak"),
    Fragment::new("Release", 7, "a tank overfill"),
    Fragment::new("Release", 6, "a heat-exchanger tube rupture"),
    Fragment::new("Degradation", 6, "catalyst deactivation"),
    Fragment::new("Degradation", 5, "corrosion under insulation"),
    Fragment::new("Degradation", 6, "heavy fouling"),
    Fragment::new("Degradation", 5, "membrane scaling"),
    Fragment::new("Transition", 6, "a plant start-up"),
    Fragment::new("Transition", 6, "an emergency shutdown"),
    Fragment::new("Transition", 5, "a grade changeover"),
    Fragment::new("Transition", 7, "a turnaround restart"),
    Fragment::new("Market", 4, "a demand surge"),
    Fragment::new("Market", 5, "a feedstock shortage"),
    Fragment::new("Market", 4, "a customer specification change"),
    Fragment::new("Environment", 6, "an extreme cold spell"),
    Fragment::new("Environment", 6, "a flood at the site"),
    Fragment::new("Environment", 5, "a summer heatwave"),
    Fragment::new("Oversight", 5, "a regulatory inspection"),
    Fragment::new("Oversight", 6, "an environmental permit breach"),
    Fragment::new("Oversight", 7, "a major-incident investigation"),
    Fragment::new("People", 4, "the loss of a key operator"),
    Fragment::new("People", 5, "a contractor-heavy maintenance campaign"),
    Fragment::new("People", 3, "onboarding of a new shift team"),
];
