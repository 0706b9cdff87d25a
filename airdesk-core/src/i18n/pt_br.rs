//! Portuguese translations (pt-BR)

use super::keys::{
    CommonTexts, FlightFieldTexts, FormTexts, ResourceTexts, Translations, UserFieldTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        loading: "Carregando...",
        no_data: "Nenhum dado",
        page: "Página",
        of: "de",
        id: "ID",
    },

    flights: ResourceTexts {
        loaded: "Voos carregados",
        fetch_failed: "Falha ao buscar voos!",
        fetch_failed_description: "Ocorreu um erro ao buscar os voos.",
        load_failed: "Falha ao carregar o voo!",
        created: "Voo criado com sucesso!",
        create_failed: "Erro ao criar o voo!",
        updated: "Voo atualizado com sucesso!",
        update_failed: "Erro ao atualizar o voo!",
        deleted: "Voo excluído com sucesso!",
        delete_failed: "Erro ao excluir o voo!",
    },

    users: ResourceTexts {
        loaded: "Usuários carregados",
        fetch_failed: "Falha ao buscar usuários!",
        fetch_failed_description: "Ocorreu um erro ao buscar os usuários.",
        load_failed: "Falha ao carregar o usuário!",
        created: "Usuário criado com sucesso!",
        create_failed: "Erro ao criar usuário!",
        updated: "Usuário atualizado com sucesso!",
        update_failed: "Erro ao atualizar usuário!",
        deleted: "Usuário excluído com sucesso!",
        delete_failed: "Erro ao excluir usuário!",
    },

    records: ResourceTexts {
        loaded: "Registros carregados",
        fetch_failed: "Falha ao buscar registros!",
        fetch_failed_description: "Ocorreu um erro ao buscar os registros.",
        load_failed: "Falha ao carregar o registro!",
        created: "Registro criado com sucesso!",
        create_failed: "Erro ao criar registro!",
        updated: "Registro atualizado com sucesso!",
        update_failed: "Erro ao atualizar registro!",
        deleted: "Registro excluído com sucesso!",
        delete_failed: "Erro ao excluir registro!",
    },

    form: FormTexts {
        required_missing: "Preencha todos os campos obrigatórios",
        arrival_before_departure: "A data de chegada não pode ser anterior à de partida",
        invalid_date: "As datas devem usar o formato AAAA-MM-DD",
    },

    flight_fields: FlightFieldTexts {
        flight_number: "Número do Voo",
        departure_date: "Data de Partida",
        arrival_date: "Data de Chegada",
        departure_airport: "Aeroporto de Partida",
        arrival_airport: "Aeroporto de Chegada",
    },

    user_fields: UserFieldTexts {
        name: "Nome",
        email: "E-mail",
        password: "Senha",
        phone: "Telefone",
        role: "Perfil",
        street: "Rua",
        neighborhood: "Bairro",
        zipcode: "CEP",
        number: "Número",
        complement: "Complemento",
        city: "Cidade",
        state: "Estado",
    },
};
